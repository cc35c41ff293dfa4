//! Units of work and the processor that runs them.

/// A named unit of work.
pub trait Task: Send + Sync {
    /// Name shown when the task is processed.
    fn name(&self) -> &str;

    /// Do the work and describe what was done.
    fn execute(&self) -> String;
}

/// Sends one e-mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTask {
    to: String,
    subject: String,
    body: String,
}

impl EmailTask {
    /// Create an e-mail task.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

impl Task for EmailTask {
    fn name(&self) -> &str {
        "EmailTask"
    }

    fn execute(&self) -> String {
        format!(
            "Sending email to {} | {} | {}",
            self.to, self.subject, self.body
        )
    }
}

/// Generates one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGenerationTask {
    report_type: String,
}

impl ReportGenerationTask {
    /// Create a report task.
    pub fn new(report_type: impl Into<String>) -> Self {
        Self {
            report_type: report_type.into(),
        }
    }
}

impl Task for ReportGenerationTask {
    fn name(&self) -> &str {
        "ReportGenerationTask"
    }

    fn execute(&self) -> String {
        format!("Generating report: {}", self.report_type)
    }
}

/// Runs tasks and collects the lines they produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskProcessor;

impl TaskProcessor {
    /// Create a processor.
    pub fn new() -> Self {
        Self
    }

    /// Run one task. Returns the `Processing: …` header followed by the task's output.
    pub fn process(&self, task: &dyn Task) -> Vec<String> {
        let header = format!("Processing: {}", task.name());
        tracing::info!(task = task.name(), "{}", header);

        let outcome = task.execute();
        tracing::info!(task = task.name(), "{}", outcome);

        vec![header, outcome]
    }

    /// Run every task in order.
    pub fn process_all(&self, tasks: &[Box<dyn Task>]) -> Vec<String> {
        tasks
            .iter()
            .flat_map(|task| self.process(task.as_ref()))
            .collect()
    }
}
