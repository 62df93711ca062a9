#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use mousepath::{
    CommandBuffer, Opcode, Outcome, PathTranslator, TranslatorOptions, compare,
};

/// A path mostly made of the four path letters, so the fuzzer spends its time
/// deep in the diagonal states rather than failing on the first byte.
#[derive(Debug)]
struct FuzzPath {
    split_long_runs: bool,
    bytes: Vec<u8>,
}

impl<'a> Arbitrary<'a> for FuzzPath {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let split_long_runs = u.arbitrary()?;
        let mut bytes = Vec::new();
        while !u.is_empty() {
            let byte = match u.int_in_range(0u8..=31)? {
                0..=11 => b'F',
                12..=19 => b'R',
                20..=27 => b'L',
                28..=29 => b'S',
                _ => u.arbitrary()?,
            };
            bytes.push(byte);
        }
        Ok(FuzzPath {
            split_long_runs,
            bytes,
        })
    }
}

fn translate(path: FuzzPath) {
    let options = TranslatorOptions {
        split_long_runs: path.split_long_runs,
        ..Default::default()
    };
    let mut translator = PathTranslator::new(options);

    let mut full = CommandBuffer::<4096>::new();
    let translation = translator.translate(&path.bytes, &mut full);
    if translation.truncated {
        return;
    }

    let ops = full.as_slice();
    assert_eq!(ops.last(), Some(&Opcode::STOP), "stream must end in STOP");
    assert_eq!(ops.len(), translation.emitted);
    assert!(translation.consumed <= path.bytes.len() + 2);

    let body = &ops[..ops.len() - 1];
    assert!(!body.contains(&Opcode::STOP), "STOP only at the end");
    let errors: Vec<usize> = body
        .iter()
        .enumerate()
        .filter_map(|(i, op)| op.is_error().then_some(i))
        .collect();
    match translation.outcome {
        Outcome::Completed => assert!(errors.is_empty()),
        Outcome::Failed(reason) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(body.last(), Some(&Opcode::Error(reason)));
        }
    }

    for op in ops {
        assert_eq!(Opcode::try_from(op.to_byte()), Ok(*op));
    }

    // A smaller buffer holds an exact prefix of the same stream.
    let mut small = CommandBuffer::<8>::new();
    translator.translate(&path.bytes, &mut small);
    let kept = small.len();
    assert_eq!(kept, ops.len().min(small.capacity()));
    assert!(compare(&ops[..kept], small.as_slice(), kept).is_match());
}

fuzz_target!(|path: FuzzPath| translate(path));
