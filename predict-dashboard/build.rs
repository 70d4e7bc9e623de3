use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Aggregate the per-state fixture into monthly totals at build time.
    // The runtime chart only needs the 12 totals; summing here keeps the
    // WASM binary from carrying the whole fixture.
    let src = Path::new("../fixtures/fires_by_month.csv");
    let dest = Path::new(&out_dir).join("fires_by_month.csv");

    if src.exists() {
        let mut totals: BTreeMap<u32, f64> = BTreeMap::new();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(src)
            .expect("Failed to open fires_by_month.csv");

        for record in rdr.records().flatten() {
            let month: u32 = match record.get(1).and_then(|m| m.trim().parse().ok()) {
                Some(m) if (1..=12).contains(&m) => m,
                _ => continue,
            };
            let fires: f64 = match record.get(2).and_then(|v| v.trim().parse().ok()) {
                Some(v) => v,
                None => continue,
            };
            *totals.entry(month).or_insert(0.0) += fires;
        }

        let mut output = String::new();
        for (month, total) in &totals {
            output.push_str(&format!("{},{:.0}\n", month, total));
        }
        fs::write(&dest, output).unwrap();
    } else {
        // Minimal inline sample so the app still builds without the fixture
        fs::write(&dest, "6,1200\n7,1800\n8,1600\n").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/fires_by_month.csv");
}
