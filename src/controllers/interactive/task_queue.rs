use std::collections::VecDeque;

/// A unit of deferred work for the interactive message loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Continue the raster job of `generation` by one row batch.
    RenderBatch { generation: u64 },
    /// Advance the Julia sweep by one step.
    SweepTick,
}

/// FIFO of pending tasks.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    pub fn next(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Removes every queued task equal to `task` and returns how many were dropped.
    pub fn withdraw(&mut self, task: Task) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|queued| *queued != task);

        before - self.tasks.len()
    }

    #[must_use]
    pub fn contains(&self, task: Task) -> bool {
        self.tasks.contains(&task)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
