#![allow(missing_docs)]
#![allow(dead_code)]

use std::fmt::Write as _;

use mousepath::{CommandBuffer, DEFAULT_CAPACITY, Opcode};
use tracing_subscriber::EnvFilter;

/// Routes translator logs to the test output; set `RUST_LOG=mousepath=trace`
/// to see every state transition.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds an opcode list from a rendered listing such as `FWD1, SS90ER, STOP`.
pub fn ops(listing: &str) -> Vec<Opcode> {
    listing
        .split(',')
        .map(|name| {
            name.parse()
                .unwrap_or_else(|err| panic!("bad opcode name {name:?}: {err}"))
        })
        .collect()
}

/// Side-by-side listing of two streams, marking differing positions.
pub fn side_by_side(expected: &[Opcode], actual: &CommandBuffer<DEFAULT_CAPACITY>) -> String {
    let mut out = String::new();
    for (i, exp) in expected.iter().enumerate() {
        let act = actual.as_slice().get(i);
        let marker = if act == Some(exp) { ' ' } else { '>' };
        let act = act.map_or_else(|| "-".to_string(), ToString::to_string);
        let exp_name = exp.to_string();
        let _ = writeln!(out, " {marker} expected: {exp_name:>6}  actual: {act:>6}");
        if exp.is_stop() {
            break;
        }
    }
    out
}
