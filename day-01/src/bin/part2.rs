use day_01::part2::score_file;
use miette::Context;

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/input2.txt");

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let result = score_file(INPUT).context("process part 2")?;
    println!("{}", result);
    Ok(())
}
