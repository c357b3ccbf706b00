// tests/overlap.rs

//! End-to-end reporter scenarios over an in-memory repository source

use std::collections::BTreeMap;

use synergy_check::{
    collect_packages, report_overlaps, CheckConfig, Error, PrimarySource, Result,
};

/// Serves canned primary.xml bytes per repository address
struct FixtureSource {
    primaries: BTreeMap<String, Vec<u8>>,
}

impl FixtureSource {
    fn new() -> Self {
        Self {
            primaries: BTreeMap::new(),
        }
    }

    fn serve(&mut self, base: &str, names: &[&str]) -> &mut Self {
        let packages: String = names
            .iter()
            .map(|n| format!("<package type=\"rpm\"><name>{n}</name></package>"))
            .collect();
        let xml = format!(
            "<metadata xmlns=\"http://linux.duke.edu/metadata/common\">{packages}</metadata>"
        );
        self.primaries.insert(base.to_string(), xml.into_bytes());
        self
    }
}

impl PrimarySource for FixtureSource {
    fn locate_primary(&self, base: &str) -> Result<Option<String>> {
        match self.primaries.get(base) {
            Some(_) => Ok(Some("repodata/primary.xml.gz".to_string())),
            None => Err(Error::Download(format!("HTTP 404 from {base}"))),
        }
    }

    fn fetch_primary(&self, base: &str, _href: &str) -> Result<Vec<u8>> {
        self.primaries
            .get(base)
            .cloned()
            .ok_or_else(|| Error::Download(format!("HTTP 404 from {base}")))
    }
}

/// One-version config with single-address families pointing at the fixture
fn fixture_config(version: &str) -> CheckConfig {
    let mut epel = BTreeMap::new();
    epel.insert(version.to_string(), vec![format!("http://epel.test/{version}/")]);
    let mut synergy = BTreeMap::new();
    synergy.insert(
        version.to_string(),
        vec![format!("http://synergy.test/{version}/")],
    );
    CheckConfig {
        versions: vec![version.to_string()],
        epel,
        synergy,
    }
}

fn run(source: &FixtureSource, config: &CheckConfig) -> (bool, String) {
    let mut out = Vec::new();
    let found = report_overlaps(source, config, &mut out).unwrap();
    (found, String::from_utf8(out).unwrap())
}

#[test]
fn reports_overlapping_package_for_a_version() {
    let mut source = FixtureSource::new();
    source
        .serve("http://epel.test/8/", &["xapps-devel", "foo"])
        .serve("http://synergy.test/8/", &["xapps-devel", "bar"]);

    let (found, output) = run(&source, &fixture_config("8"));
    assert!(found);
    assert_eq!(
        output,
        "Package exists in both EPEL and Synergy for version 8: xapps-devel\n"
    );
}

#[test]
fn disjoint_families_produce_single_no_overlap_line() {
    let mut source = FixtureSource::new();
    source
        .serve("http://epel.test/8/", &["foo"])
        .serve("http://synergy.test/8/", &["bar"]);
    source
        .serve("http://epel.test/9/", &["baz"])
        .serve("http://synergy.test/9/", &["qux"]);

    let mut config = fixture_config("8");
    let nine = fixture_config("9");
    config.versions.push("9".to_string());
    config.epel.extend(nine.epel);
    config.synergy.extend(nine.synergy);

    let (found, output) = run(&source, &config);
    assert!(!found);
    assert_eq!(output, "No packages found in both EPEL and Synergy repos\n");
}

#[test]
fn intersection_is_independent_of_input_order() {
    let mut forward = FixtureSource::new();
    forward
        .serve("http://epel.test/9/", &["a", "b", "c"])
        .serve("http://synergy.test/9/", &["b", "c", "d"]);

    let mut reversed = FixtureSource::new();
    reversed
        .serve("http://epel.test/9/", &["c", "b", "a"])
        .serve("http://synergy.test/9/", &["d", "c", "b"]);

    let config = fixture_config("9");
    let (_, out_forward) = run(&forward, &config);
    let (_, out_reversed) = run(&reversed, &config);

    assert_eq!(
        out_forward,
        "Package exists in both EPEL and Synergy for version 9: b\n\
         Package exists in both EPEL and Synergy for version 9: c\n"
    );
    assert_eq!(out_forward, out_reversed);
}

#[test]
fn duplicate_names_across_architectures_report_once() {
    let mut source = FixtureSource::new();
    // Both architecture addresses of each family publish "foo"
    source
        .serve("http://epel.test/8/", &["foo"])
        .serve("http://epel.test/8-aarch64/", &["foo"])
        .serve("http://synergy.test/8/", &["foo"])
        .serve("http://synergy.test/8-aarch64/", &["foo"]);

    let mut config = fixture_config("8");
    config
        .epel
        .get_mut("8")
        .unwrap()
        .push("http://epel.test/8-aarch64/".to_string());
    config
        .synergy
        .get_mut("8")
        .unwrap()
        .push("http://synergy.test/8-aarch64/".to_string());

    let (found, output) = run(&source, &config);
    assert!(found);
    assert_eq!(
        output,
        "Package exists in both EPEL and Synergy for version 8: foo\n"
    );
}

#[test]
fn failing_family_address_narrows_but_does_not_abort() {
    let mut source = FixtureSource::new();
    // The second EPEL address is not served at all
    source
        .serve("http://epel.test/8/", &["shared"])
        .serve("http://synergy.test/8/", &["shared", "only-synergy"]);

    let mut config = fixture_config("8");
    config
        .epel
        .get_mut("8")
        .unwrap()
        .push("http://epel.test/8-missing/".to_string());

    let (found, output) = run(&source, &config);
    assert!(found);
    assert_eq!(
        output,
        "Package exists in both EPEL and Synergy for version 8: shared\n"
    );
}

#[test]
fn collect_preserves_address_then_document_order() {
    let mut source = FixtureSource::new();
    source
        .serve("http://repo.test/x86_64/", &["zsh", "attr"])
        .serve("http://repo.test/aarch64/", &["bash"]);

    let group = vec![
        "http://repo.test/x86_64/".to_string(),
        "http://repo.test/aarch64/".to_string(),
    ];
    assert_eq!(
        collect_packages(&source, &group),
        vec!["zsh", "attr", "bash"]
    );
}
