use console::{style, Term};
use std::time::Instant;

/// Prints one `[n/total]` line per bucket.
pub struct TaskRunner {
    term: Term,
    num_tasks: usize,
    current_task: usize,
    now: Instant,
    descr: String,
    verbose: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: usize, verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: String::new(),
            verbose,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .force_styling(true)
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        self.now = Instant::now();
        self.descr = descr.into();
        println!("{} {}", self.task_id(), &self.descr);
    }

    fn finish_task(&mut self, status: String, clear_last: bool) {
        // the pending line is only replaced on a terminal
        if clear_last && self.term.is_term() {
            self.term.clear_last_lines(1).ok();
        }
        println!("{} {} {}", self.task_id(), &self.descr, status);
        self.current_task += 1;
    }

    /// Marks the running task as done, annotated with `detail`.
    pub fn end_task(&mut self, detail: &str) {
        let time = self.now.elapsed();
        let status = format!("{} [{}ms]", detail, time.as_millis());
        self.finish_task(status, !self.verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_finished_tasks() {
        let mut runner = TaskRunner::new(2, true);
        runner.start_task("drawable-ldpi");
        assert_eq!(runner.current_task, 0);
        runner.end_task("36x36");
        assert_eq!(runner.current_task, 1);
        runner.start_task("drawable-mdpi");
        assert_eq!(runner.descr, "drawable-mdpi");
        runner.end_task("48x48");
        assert_eq!(runner.current_task, 2);
    }
}
