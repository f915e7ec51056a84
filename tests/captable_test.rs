//! Stream-level tests for the capability-table usage emitter, including the
//! property that line shapes other than labels and symbol rows can never
//! affect the output.

use proptest::prelude::*;
use std::io::Cursor;

use bootgen::captable::emit_usage;

const PROLOGUE: &str = "# DO NOT EDIT. AUTO-GENERATED.\n.text\n";

fn run(input: &str) -> String {
    let mut out = Vec::new();
    emit_usage(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn mixed_listing_preloads_each_eligible_symbol_once() {
    let listing = "crt0.s\n\
                   0000 T _start\n\
                   main.cpp\n\
                   0040 T main\n\
                   0080 t helper\n\
                   types.h\n\
                   00c0 T inline_instantiation\n\
                   vector.cxx\n\
                   0100 T grow\n";
    assert_eq!(
        run(listing),
        format!(
            "{PROLOGUE}\
             clcbi $c1, %captab20(_start)($c25)\n\
             clcbi $c1, %captab20(main)($c25)\n\
             clcbi $c1, %captab20(grow)($c25)\n"
        )
    );
}

/// A line with a token count no rule matches: two tokens, or four and more.
fn inert_line() -> impl Strategy<Value = String> {
    prop_oneof![Just(2usize), 4usize..8]
        .prop_flat_map(|count| prop::collection::vec("[A-Za-z0-9_./]{1,10}", count))
        .prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn inert_lines_never_emit_or_change_state(lines in prop::collection::vec(inert_line(), 0..8)) {
        let mut listing = String::from("mod.cpp\n");
        for line in &lines {
            listing.push_str(line);
            listing.push('\n');
        }
        listing.push_str("0000 T foo\n");

        prop_assert_eq!(
            run(&listing),
            format!("{PROLOGUE}clcbi $c1, %captab20(foo)($c25)\n")
        );
    }

    #[test]
    fn inert_lines_cannot_resurrect_an_excluded_unit(lines in prop::collection::vec(inert_line(), 1..8)) {
        let mut listing = String::from("mod.h\n");
        for line in &lines {
            listing.push_str(line);
            listing.push('\n');
        }
        listing.push_str("0000 T hidden\n");

        prop_assert_eq!(run(&listing), PROLOGUE.to_string());
    }
}
