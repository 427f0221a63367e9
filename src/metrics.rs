use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub questions_created: Arc<AtomicUsize>,
    pub questions_deleted: Arc<AtomicUsize>,
    pub searches: Arc<AtomicUsize>,
    pub quiz_questions_served: Arc<AtomicUsize>,
    pub quizzes_completed: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            questions_created: Arc::new(AtomicUsize::new(0)),
            questions_deleted: Arc::new(AtomicUsize::new(0)),
            searches: Arc::new(AtomicUsize::new(0)),
            quiz_questions_served: Arc::new(AtomicUsize::new(0)),
            quizzes_completed: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_questions_created(&self) {
        self.questions_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_questions_deleted(&self) {
        self.questions_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_quiz_questions_served(&self) {
        self.quiz_questions_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_quizzes_completed(&self) {
        self.quizzes_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            questions_created: self.questions_created.load(Ordering::Relaxed),
            questions_deleted: self.questions_deleted.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            quiz_questions_served: self.quiz_questions_served.load(Ordering::Relaxed),
            quizzes_completed: self.quizzes_completed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub questions_created: usize,
    pub questions_deleted: usize,
    pub searches: usize,
    pub quiz_questions_served: usize,
    pub quizzes_completed: usize,
    pub uptime_seconds: u64,
}
