//! Renders assembled branch chains to a C-like `if/else` document.
//!
//! The fragment and condition types are syntax-neutral; this module is the
//! one place that commits to a concrete target syntax. Every emitted line
//! carries its symbolic trace as a comment so the generated code can be
//! audited against the layouts it came from.

use std::fmt::Write;

use crate::{
    cases::{Branch, GeneratedChains},
    condition::{ComparisonForm, Condition},
    fragment::{CodeFragment, Shift},
};

/// Hex literal padded to the layout width, e.g. `0x03efd000` for 32 symbols.
fn hex(value: u32, width: usize) -> String {
    format!("0x{:0>1$x}", value, width.div_ceil(4))
}

fn comparison(cond: &Condition, width: usize) -> String {
    let mask = hex(cond.mask, width);
    match (cond.form, cond.negated) {
        (ComparisonForm::AllZero, false) => format!("!( input & {mask} )"),
        (ComparisonForm::AllZero, true) => format!("input & {mask}"),
        (ComparisonForm::Equals, false) => {
            format!("( input & {mask} ) == {}", hex(cond.required, width))
        }
        (ComparisonForm::Equals, true) => {
            format!("!( ( input & {mask} ) == {} )", hex(cond.required, width))
        }
    }
}

fn guard_comment(cond: &Condition) -> String {
    let op = if cond.negated { "!=" } else { "==" };
    format!("// {} {} {}", cond.trace.symbols, op, cond.trace.bits)
}

fn render_fragment(out: &mut String, fragment: &CodeFragment, width: usize) {
    let _ = writeln!(
        out,
        "    output  = {}; // {}",
        hex(fragment.init.value, width),
        fragment.init.trace
    );
    for op in &fragment.ops {
        let shift = match op.shift {
            Shift::None => String::new(),
            Shift::Right(n) => format!(" >> {n:>2}"),
            Shift::Left(n) => format!(" << {n:>2}"),
        };
        let _ = writeln!(
            out,
            "    output |= (input & {}){}; // {}",
            hex(op.mask, width),
            shift,
            op.trace
        );
    }
}

fn render_branch(out: &mut String, branch: &Branch, width: usize, first: bool) {
    let lead = if first { "" } else { "} else " };
    let _ = writeln!(out, "{lead}// Case {}", branch.name);

    if branch.guards.is_empty() {
        out.push_str("{\n");
    } else {
        for (i, guard) in branch.guards.iter().enumerate() {
            let open = if i == 0 { "if ( " } else { "     " };
            let close = if i + 1 == branch.guards.len() {
                " ) {"
            } else {
                " &&"
            };
            let _ = writeln!(
                out,
                "{open}{}{close} {}",
                comparison(guard, width),
                guard_comment(guard)
            );
        }
    }
    render_fragment(out, &branch.fragment, width);
}

fn render_chain(out: &mut String, title: &str, branches: &[Branch], width: usize) {
    let _ = writeln!(out, "// {title}");
    for (i, branch) in branches.iter().enumerate() {
        render_branch(out, branch, width, i == 0);
    }
    out.push_str("}\n");
}

/// Renders the full output document: encode chain then decode chain.
pub fn render_document(chains: &GeneratedChains, width: usize) -> String {
    let mut out = String::new();
    render_chain(&mut out, "ENCODE", &chains.encode, width);
    out.push('\n');
    render_chain(&mut out, "DECODE", &chains.decode, width);
    out
}
