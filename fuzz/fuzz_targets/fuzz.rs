#![no_main]
use lelana_censor::{init_filter, normalize, split_tokens, FilterConfig, Outcome, MASK};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let config = FilterConfig::default().with_bad_words(["anjing", "babi"]);
        let censor = init_filter(&config).unwrap();

        let normalized = normalize(text);
        assert_eq!(normalize(&normalized), normalized);
        assert_eq!(split_tokens(text).concat(), text);

        let (censored, outcome) = censor.censor_and_analyze(text);
        match outcome {
            Outcome::Clean => assert_eq!(censored, text),
            Outcome::Censored | Outcome::Fallback => assert!(censored.contains(MASK)),
        }
    }
});
