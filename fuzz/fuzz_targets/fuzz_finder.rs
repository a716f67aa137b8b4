#![no_main]

use libfuzzer_sys::fuzz_target;
use subsift::corpus::Corpus;
use subsift::finder::{FinderConfig, SubstringFinder};
use termcolor::Buffer;

fuzz_target!(|data: &[u8]| {
    // Split the input into a positive and a negative corpus and run the
    // whole pipeline; no input may panic or report out-of-bounds text.
    let split = data.len() / 2;
    let positive = Corpus::new(data[..split].to_vec());
    let negative = Corpus::new(data[split..].to_vec());

    for config in [
        FinderConfig::default(),
        FinderConfig {
            count_documents: true,
            probability: true,
            ..Default::default()
        },
        FinderConfig {
            unique: true,
            top: 4,
            ..Default::default()
        },
        FinderConfig {
            color: true,
            ..Default::default()
        },
    ] {
        let finder = SubstringFinder::new(&positive, &negative, config).unwrap();
        let mut sink = Buffer::no_color();
        let _ = finder.run(&mut sink);
    }
});
