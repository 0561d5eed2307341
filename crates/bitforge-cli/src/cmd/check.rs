use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;

use bitforge::{
    layout::Symbol,
    mapper::{self, Direction},
};

#[derive(Args)]
pub struct CheckArgs {
    /// JSON case-table config; defaults to the built-in BaseXML table
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let table = super::load_table(args.config.as_deref())?;
    let chains = table.generate().context("generation failed")?;

    let mut failures = 0;
    for (case, branch) in table.cases().iter().zip(&chains.encode) {
        let input = &case.pair.input;
        let output = &case.pair.output;
        let runs = mapper::find_runs(input, output)?;
        let decode = mapper::synthesize(input, output, Direction::Decode)?;

        let ok = round_trips(case, &branch.fragment, &decode);
        if !ok {
            failures += 1;
        }
        println!(
            "{:30} {:2} runs  {:2} guards  round-trip {}",
            case.name,
            runs.len(),
            branch.guards.len(),
            if ok { "ok" } else { "FAILED" }
        );
    }

    if failures > 0 {
        bail!("{failures} case(s) failed the round-trip check");
    }
    println!("{} cases ok", table.cases().len());
    Ok(())
}

/// Samples deterministic words over the case's variable bits and checks that
/// decoding the encoded word restores every letter shared by both layouts.
fn round_trips(
    case: &bitforge::cases::Case,
    encode: &bitforge::fragment::CodeFragment,
    decode: &bitforge::fragment::CodeFragment,
) -> bool {
    let input = &case.pair.input;
    let output = &case.pair.output;

    let mut mask = 0u32;
    for i in 0..input.width() {
        match input.at(i) {
            Symbol::Zero | Symbol::One => mask |= input.bit(i),
            Symbol::Var(c) => {
                if output.symbols().contains(&Symbol::Var(c)) {
                    mask |= input.bit(i);
                }
            }
            Symbol::Any => {}
        }
    }

    for seed in [0u32, 0xFFFFFFFF, 0xA5A5A5A5, 0x5A5A5A5A, 0x31415926, 0x27182818] {
        let mut word = input.ones_mask();
        for i in 0..input.width() {
            if input.at(i).is_var() {
                word |= seed & input.bit(i);
            }
        }
        if decode.apply(encode.apply(word)) & mask != word & mask {
            return false;
        }
    }
    true
}
