use serde::Deserialize;
use tracing::{
    info,
    warn
};

use crate::intensity::intensityerror::IntensityError;
use crate::intensity::intensitysegments::IntensitySegments;
use crate::script::operation::Operation;

/// One call in a script, with what the map should look like afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    #[serde(flatten)]
    operation: Operation,
    #[serde(default)]
    expect: Option<String>,
    #[serde(default)]
    expect_invalid_range: bool
}

impl ScriptStep {
    pub fn new(operation: Operation, expect: Option<String>) -> ScriptStep {
        ScriptStep { operation, expect, expect_invalid_range: false }
    }

    pub fn rejected(operation: Operation) -> ScriptStep {
        ScriptStep { operation, expect: None, expect_invalid_range: true }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn expect(&self) -> Option<&str> {
        self.expect.as_deref()
    }

    pub fn expect_invalid_range(&self) -> bool {
        self.expect_invalid_range
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationScript {
    name: String,
    steps: Vec<ScriptStep>
}

impl OperationScript {
    pub fn new(name: String, steps: Vec<ScriptStep>) -> OperationScript {
        OperationScript { name, steps }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Runs every step against a fresh map. A failing step is recorded and the
    /// replay carries on with the next one.
    pub fn replay(&self) -> ScriptReport {
        let mut segments = IntensitySegments::<f64>::new();
        let steps: Vec<StepReport> = self.steps
            .iter()
            .map(|step| StepReport::run(step, &mut segments))
            .collect();
        let report = ScriptReport { name: self.name.to_owned(), steps };
        info!(script = %report.name, passed = report.passed_count(), failed = report.failed_count(), "replayed script");
        report
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    description: String,
    actual: String,
    expected: Option<String>,
    passed: bool
}

impl StepReport {
    fn run(step: &ScriptStep, segments: &mut IntensitySegments<f64>) -> StepReport {
        let description = format!("After {}", step.operation());
        let outcome = step.operation().apply(segments);
        let (actual, passed) = match outcome {
            Ok(()) => {
                let actual = segments.serialize();
                let passed = !step.expect_invalid_range()
                    && step.expect().is_none_or(|expected| expected == actual);
                (actual, passed)
            },
            Err(error @ IntensityError::InvalidRange { .. }) => {
                (error.to_string(), step.expect_invalid_range())
            }
        };
        let expected = if step.expect_invalid_range() {
            Some("invalid range".to_owned())
        } else {
            step.expect().map(str::to_owned)
        };
        if !passed {
            warn!(step = %description, %actual, expected = ?expected, "step failed");
        }
        StepReport { description, actual, expected, passed }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptReport {
    name: String,
    steps: Vec<StepReport>
}

impl ScriptReport {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    pub fn passed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.steps.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }
}
