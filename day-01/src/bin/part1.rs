use day_01::part1::distance_file;
use miette::Context;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt");

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let result = distance_file(INPUT).context("process part 1")?;
    println!("{}", result);
    Ok(())
}
