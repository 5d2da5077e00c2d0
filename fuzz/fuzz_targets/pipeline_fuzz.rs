//! Pipeline fuzz target: feed arbitrary bytes through the demo front end.
//! No stage may panic; every input ends in output or a stage error.
//! Build with: cargo fuzz run pipeline_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let fe = ruleforge::demo::frontend();
    let tokens = match fe.tokenize(data) {
        Ok(t) => t,
        Err(_) => return,
    };
    if let Ok(tree) = fe.parse(&tokens) {
        let _ = fe.transpile(&tree);
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run pipeline_fuzz");
}
