//! Basic example demonstrating resampling schemes
//!
//! Run with: cargo run --example basic -p rustful-resample

use resample::prelude::*;

fn main() -> Result<()> {
    println!("=== rustful-resample Basic Examples ===\n");

    let dataset = Dataset::with_len(20);
    let labels = StratumLabels::new((0..20).map(|i| if i % 5 == 0 { "pos" } else { "neg" }));

    // 1. Holdout
    println!("1. Initial Split (75/25)");
    let holdout = resample(&dataset, &SchemeBuilder::initial_split(0.75).seed(42).build(), None)?;
    let split = &holdout.splits()[0];
    println!("   {}", split);
    println!("   Analysis:   {:?}", split.analysis());
    println!("   Assessment: {:?}\n", split.assessment());

    // 2. Stratified k-fold
    println!("2. Stratified 4-Fold Cross-Validation");
    let config = SchemeBuilder::vfold(4).stratified().seed(42).build();
    let cv = resample(&dataset, &config, Some(&labels))?;
    for split in &cv {
        let pos = split.assessment().iter().filter(|&&r| labels.label(r) == "pos").count();
        println!("   {} {}  positives held out: {}", split.id(), split, pos);
    }
    println!();

    // 3. Bootstrap
    println!("3. Bootstrap (5 draws)");
    let boot = resample(&dataset, &SchemeBuilder::bootstrap(5).seed(42).build(), None)?;
    println!("   Out-of-bag sizes: {:?}\n", boot.assessment_sizes());

    // 4. Rolling origin
    println!("4. Rolling Origin (initial 15, fixed window)");
    let rolling = resample(&dataset, &SchemeBuilder::rolling_origin(15).cumulative(false).build(), None)?;
    print!("{}", rolling);
    println!();

    // 5. Nested resampling
    println!("5. Nested: 4-fold outer, 3-fold inner");
    let nested = SchemeBuilder::vfold(4).seed(1).nest(SchemeBuilder::vfold(3).seed(2)).build();
    let set = resample(&dataset, &nested, None)?;
    print!("{}", set);
    println!("   Tidy records: {}\n", tidy_nested(&set).len());

    // 6. Configuration as JSON
    println!("6. Scheme Configuration");
    match serde_json::to_string(&nested) {
        Ok(json) => println!("   {}", json),
        Err(e) => println!("   Failed to serialize: {}", e),
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
