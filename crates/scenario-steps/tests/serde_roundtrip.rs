//! Serde coverage for the model types, gated behind the `serde` feature.
#![expect(
    clippy::expect_used,
    reason = "test asserts the serialisation path succeeds"
)]

use scenario_steps::{Annotation, BuildError, DocBlock, Step, StepBuilder};

fn table_step() -> Result<Step, BuildError> {
    let mut builder = StepBuilder::new(
        vec![Annotation::new("# inventory", 2)],
        "Given ",
        "these cukes",
        3,
    );
    builder.append_row(Vec::new(), vec!["gala".to_owned(), "2".to_owned()], 4)?;
    builder.append_row(Vec::new(), vec!["fuji".to_owned(), "9".to_owned()], 5)?;
    Ok(builder.build())
}

#[test]
fn step_with_table_round_trips_through_json() -> Result<(), BuildError> {
    let step = table_step()?;
    let json = serde_json::to_string(&step).expect("step should serialise");
    let back: Step = serde_json::from_str(&json).expect("step should deserialise");
    assert_eq!(back, step);
    Ok(())
}

#[test]
fn step_with_doc_block_round_trips_through_json() -> Result<(), BuildError> {
    let mut builder = StepBuilder::new(Vec::new(), "Then ", "the log shows", 10);
    builder.attach_doc_block(DocBlock::new("text/plain", "a\nb", 11))?;
    let step = builder.build();
    let json = serde_json::to_string(&step).expect("step should serialise");
    let back: Step = serde_json::from_str(&json).expect("step should deserialise");
    assert_eq!(back, step);
    assert_eq!(back.line_span(), step.line_span());
    Ok(())
}
