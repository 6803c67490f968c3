use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const ITINERARY: &str = "\
Flight from #LHR to ##KJFK
Departs T24(2031-12-03T13:15+01:00) on D(2031-12-03T13:15+01:00)
";

#[test]
fn test_prettify_plain() -> Result<()> {
    let test = CliTest::with_input(ITINERARY)?;

    let output = test.prettify(&["--no-color"])?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    insta::assert_snapshot!(test.read_file("output.txt")?, @r#"
    Flight from "Heathrow Airport" to "John F Kennedy International Airport"
    Departs 13:15 (+01:00) on 03 Dec 2031
    "#);
    assert_eq!(stderr(&output), "\u{2713} Wrote output.txt (4 substitutions)\n");
    assert!(stdout(&output).is_empty());

    Ok(())
}

#[test]
fn test_prettify_colors_by_default() -> Result<()> {
    let test = CliTest::with_input("*#LHR at T12(2031-12-03T13:15Z)")?;

    let output = test.prettify(&[])?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("output.txt")?,
        "\u{1b}[1;35mLondon\u{1b}[0m at \u{1b}[1;35m01:15PM (+00:00)\u{1b}[0m"
    );

    Ok(())
}

#[test]
fn test_print_echoes_output() -> Result<()> {
    let test = CliTest::with_input("Arrive *##KJFK\n\n\n\n\nThanks")?;

    let output = test.prettify(&["--no-color", "--print"])?;
    assert!(output.status.success());

    assert_eq!(stdout(&output), "Arrive New York\n\nThanks\n");
    assert_eq!(test.read_file("output.txt")?, "Arrive New York\n\nThanks");

    Ok(())
}

#[test]
fn test_config_disables_color() -> Result<()> {
    let test = CliTest::with_input("#JFK")?;
    test.write_file(".itineraryrc.json", r#"{ "color": false }"#)?;

    let output = test.prettify(&[])?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("output.txt")?,
        "\"John F Kennedy International Airport\""
    );

    Ok(())
}

#[test]
fn test_config_renames_columns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("input.txt", "#LHR / *#LHR")?;
    test.write_file("airports.csv", "Airport,City,IATA,ICAO\nHeathrow,London,LHR,EGLL\n")?;
    test.write_file(
        "config/itinerary.json",
        r#"{
          "columns": { "name": "airport", "shortCode": "iata", "longCode": "icao", "locality": "city" },
          "color": false
        }"#,
    )?;

    let output = test.prettify(&["--config", "config/itinerary.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("output.txt")?, "\"Heathrow\" / London");

    Ok(())
}

#[test]
fn test_unknown_tokens_pass_through() -> Result<()> {
    let test = CliTest::with_input("#ZZZ then ##ZZZZ on D(yesterday)")?;

    let output = test.prettify(&[])?;
    assert!(output.status.success());

    assert_eq!(test.read_file("output.txt")?, "#ZZZ then ##ZZZZ on D(yesterday)");
    assert!(stderr(&output).contains("(0 substitutions)"));
    assert!(stderr(&output).contains("warning: 3 token(s) could not be resolved"));

    Ok(())
}

#[test]
fn test_verbose_reports_passes() -> Result<()> {
    let test = CliTest::with_input(ITINERARY)?;

    let output = test.prettify(&["--no-color", "-v"])?;
    assert!(output.status.success());

    let stderr = stderr(&output);
    assert!(stderr.contains("using default config"));
    assert!(stderr.contains("Loaded 2 airport rows"));
    assert!(stderr.contains("short-code"));
    assert!(stderr.contains("local-time-24"));

    Ok(())
}

#[test]
fn test_missing_arguments_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["input.txt", "output.txt"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with(
        "itinerary usage:\n$ itinerary ./input.txt ./output.txt ./airport-lookup.csv\n"
    ));
    assert!(!test.root().join("output.txt").exists());

    Ok(())
}

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("itinerary usage:"));

    Ok(())
}

#[test]
fn test_input_not_found() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.prettify(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "\u{2718} Input not found\n");
    assert!(!test.root().join("output.txt").exists());

    Ok(())
}

#[test]
fn test_lookup_not_found() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("input.txt", "#LHR")?;

    let output = test.prettify(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "\u{2718} Airport lookup not found\n");

    Ok(())
}

#[test]
fn test_lookup_malformed() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("input.txt", "#LHR")?;
    test.write_file("airports.csv", "name,iata_code,icao_code\nHeathrow,LHR,EGLL\n")?;

    let output = test.prettify(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "\u{2718} Airport lookup malformed\n");
    assert!(!test.root().join("output.txt").exists());

    let verbose = test.prettify(&["-v"])?;
    assert!(stderr(&verbose).contains("caused by: required column 'municipality' is missing"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_input("#LHR")?;
    test.write_file(".itineraryrc.json", r#"{ "columns": { "name": "" } }"#)?;

    let output = test.prettify(&[])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("\u{2718} Error: Invalid 'columns'"));

    Ok(())
}

#[test]
fn test_help_describes_markup() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Markup:"));
    assert!(help.contains("T24(2031-12-03T13:15+01:00)"));

    Ok(())
}
