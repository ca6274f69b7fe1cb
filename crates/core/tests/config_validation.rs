use assert_approx_eq::assert_approx_eq;
use hexgrid::{Hex, LineConfig, LineSign, LineTracer};
use validator::ValidationErrors;

#[test]
fn test_line_config_default() {
    // Missing fields get populated with defaults
    let config: LineConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, LineConfig::default());
    assert_eq!(LineTracer::new(&config).unwrap(), LineTracer::DEFAULT);

    let config: LineConfig =
        serde_json::from_str(r#"{"epsilon_r": 0.00001}"#).unwrap();
    assert_eq!(config.epsilon_q, LineConfig::DEFAULT_EPSILON_Q);
    assert_approx_eq!(config.epsilon_r, 0.00001, 1e-12);
}

#[test]
fn test_line_config_validation() {
    let config = LineConfig {
        epsilon_q: -1e-6, // invalid
        epsilon_r: 2e-6,  // valid
    };

    let err = LineTracer::new(&config).unwrap_err();
    assert_eq!(err.to_string(), "invalid line config");
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["epsilon_q"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_custom_tracer() {
    let tracer = LineTracer::new(&LineConfig {
        epsilon_q: 3e-5,
        epsilon_r: 5e-5,
    })
    .unwrap();
    let from = Hex::new(-6, 2);
    let to = Hex::new(9, -11);
    for sign in [LineSign::Plus, LineSign::Minus] {
        let line = tracer.line(from, to, sign);
        assert_eq!(line.len(), 16);
        assert_eq!(line.first(), Some(&from));
        assert_eq!(line.last(), Some(&to));
        assert!(line.windows(2).all(|pair| pair[0].distance_to(pair[1]) == 1));
    }
}
