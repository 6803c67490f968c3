use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(
        stderr(&output),
        "\u{2713} Created .itineraryrc.json\n  lookup columns: name, iata_code, icao_code, municipality\n"
    );

    let content = test.read_file(".itineraryrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["columns"]["shortCode"], "iata_code");
    assert_eq!(parsed["columns"]["longCode"], "icao_code");
    assert_eq!(parsed["color"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".itineraryrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .itineraryrc.json already exists, remove it to start over\n");
    assert_eq!(test.read_file(".itineraryrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_input("#LHR")?;

    test.command().arg("init").output()?;

    let output = test.prettify(&[])?;
    assert!(
        output.status.success(),
        "Prettify should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(
        test.read_file("output.txt")?,
        "\u{1b}[1;34m\"Heathrow Airport\"\u{1b}[0m"
    );

    Ok(())
}
