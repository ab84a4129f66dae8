#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::Deserialize;

const CODEGEN_HEADER: &str = r#"// Codegen - Sourced @ resources/coefficients.json
// All required attributes
use crate::prelude::*;

"#;

/// Every type the library exposes. The resource file must provide each exactly once.
const REQUIRED_TYPES: [&str; 8] = ["B", "E", "J", "K", "N", "R", "S", "T"];

#[derive(Debug, Deserialize)]
struct Resource {
    header: Header,
    thermocouples: Vec<Thermocouple>,
}

#[derive(Debug, Deserialize)]
struct Header {
    source: String,
    support_url: String,
    voltage_unit: String,
    temperature_unit: String,
}

#[derive(Debug, Deserialize)]
struct Thermocouple {
    r#type: String,
    alloys: String,
    boundary: String,
    cold_junction: ColdJunction,
    segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct ColdJunction {
    T0: f64,
    V0: f64,
    p1: f64,
    p2: f64,
    p3: f64,
    p4: f64,
    q1: f64,
    q2: f64,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct Segment {
    range: [f64; 2],
    T0: f64,
    V0: f64,
    p1: f64,
    p2: f64,
    p3: f64,
    p4: f64,
    q1: f64,
    q2: f64,
    q3: f64,
}

#[derive(Debug, Clone, Copy)]
enum Boundary {
    ClosedLow,
    ClosedHigh,
}

impl TryFrom<&str> for Boundary {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "closed_low" => Ok(Boundary::ClosedLow),
            "closed_high" => Ok(Boundary::ClosedHigh),
            _ => Err(()),
        }
    }
}

impl Boundary {
    fn variant(&self) -> &'static str {
        match self {
            Boundary::ClosedLow => "ClosedLow",
            Boundary::ClosedHigh => "ClosedHigh",
        }
    }

    fn interval(&self, low: f64, high: f64) -> String {
        match self {
            Boundary::ClosedLow => format!("[{low}, {high})"),
            Boundary::ClosedHigh => format!("({low}, {high}]"),
        }
    }
}

fn main() {
    let input_file = "./resources/coefficients.json";
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_file = Path::new(&out_dir).join("codegen.rs");

    let content = fs::read_to_string(input_file).expect("Failed to read coefficient file");
    let resource: Resource =
        serde_json::from_str(&content).expect("Failed to parse coefficient file");

    assert_eq!(
        (resource.header.voltage_unit.as_str(), resource.header.temperature_unit.as_str()),
        ("mV", "degC"),
        "Coefficient tables must be expressed in mV and degC"
    );

    let mut output = String::new();
    output.write_str(CODEGEN_HEADER).unwrap();
    output
        .write_str(&format!(
            r#"
// Calibration Source: {}
// Support URL: {}
"#,
            resource.header.source, resource.header.support_url
        ))
        .unwrap();

    let mut seen = HashSet::new();
    for thermocouple in &resource.thermocouples {
        let letter = thermocouple.r#type.as_str();
        if !REQUIRED_TYPES.contains(&letter) {
            panic!("Unsupported thermocouple type {letter}");
        }
        if !seen.insert(letter.to_string()) {
            panic!("Thermocouple type {letter} is defined more than once");
        }

        let boundary = Boundary::try_from(thermocouple.boundary.as_str()).unwrap_or_else(|_| {
            panic!(
                "Unknown boundary rule {:?} for type {letter}",
                thermocouple.boundary
            )
        });

        validate_segments(letter, &thermocouple.segments);
        generate_profile(&mut output, thermocouple, boundary);
    }

    for letter in REQUIRED_TYPES {
        if !seen.contains(letter) {
            panic!("Missing coefficient table for thermocouple type {letter}");
        }
    }

    output.push_str(&format!(
        "\n/// Every generated profile, in declaration order.\npub static PROFILES: [&TypeProfile; {}] = [\n",
        resource.thermocouples.len()
    ));
    for thermocouple in &resource.thermocouples {
        output.push_str(&format!("\t&TYPE_{},\n", thermocouple.r#type));
    }
    output.push_str("];\n");

    fs::write(&output_file, output).expect("Failed to write output file");
    println!("cargo:rerun-if-changed={}", input_file);
}

// Segments must be ordered, non-empty and share their boundaries exactly.
fn validate_segments(letter: &str, segments: &[Segment]) {
    if segments.is_empty() {
        panic!("Type {letter} has no segments");
    }

    for segment in segments {
        let [low, high] = segment.range;
        if low >= high {
            panic!("Type {letter} has an empty or inverted segment [{low}, {high}]");
        }
    }

    for pair in segments.windows(2) {
        let previous = pair[0].range[1];
        let next = pair[1].range[0];
        if previous != next {
            panic!(
                "Type {letter} segments are not contiguous: {previous} is followed by {next}"
            );
        }
    }
}

#[allow(non_snake_case)]
fn generate_profile(output: &mut String, thermocouple: &Thermocouple, boundary: Boundary) {
    let letter = &thermocouple.r#type;
    let ColdJunction {
        T0,
        V0,
        p1,
        p2,
        p3,
        p4,
        q1,
        q2,
    } = &thermocouple.cold_junction;

    let low = thermocouple.segments.first().map(|s| s.range[0]).unwrap();
    let high = thermocouple.segments.last().map(|s| s.range[1]).unwrap();

    output.push_str(&format!(
        r#"
/**
  * #### Type {letter}
  *
  * **Alloys**: {} \
  * **Segments**: {} \
  * **Domain**: `{}` mV
  */
pub static TYPE_{letter}: TypeProfile = TypeProfile {{
    kind: ThermocoupleType::Type{letter},
    alloys: {:?},
    cold_junction: ColdJunctionCoefficients {{
        t0: {T0:?},
        v0: {V0:?},
        p: [{p1:?}, {p2:?}, {p3:?}, {p4:?}],
        q: [{q1:?}, {q2:?}],
    }},
    segments: &[
"#,
        thermocouple.alloys,
        thermocouple.segments.len(),
        boundary.interval(low, high),
        thermocouple.alloys,
    ));

    for segment in &thermocouple.segments {
        output.push_str(&format_segment(segment, boundary));
    }

    output.push_str("    ],\n};\n");
}

fn format_segment(segment: &Segment, boundary: Boundary) -> String {
    let [low, high] = segment.range;
    format!(
        r#"        // {}
        Segment {{
            range: VoltageRange {{
                low: {low:?},
                high: {high:?},
                inclusivity: Inclusivity::{},
            }},
            coefficients: CoefficientSet {{
                t0: {:?},
                v0: {:?},
                p: [{:?}, {:?}, {:?}, {:?}],
                q: [{:?}, {:?}, {:?}],
            }},
        }},
"#,
        boundary.interval(low, high),
        boundary.variant(),
        segment.T0,
        segment.V0,
        segment.p1,
        segment.p2,
        segment.p3,
        segment.p4,
        segment.q1,
        segment.q2,
        segment.q3,
    )
}
