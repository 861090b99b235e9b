//! What the Activator owns once triggers start firing: one chart slot per
//! canvas and the abort handles of running counters.

use std::future::Future;

use activator_core::CounterAnimation;
use chart_frontend::{ChartInstance, ChartSlot};
use futures_util::future::{AbortHandle, Abortable};
use futures_util::{Stream, StreamExt};

/// Handle returned by [`ActivatorResources::track_counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub counters: usize,
    pub charts: usize,
}

pub struct ActivatorResources<C: ChartInstance> {
    pub production: ChartSlot<C>,
    pub benefits: ChartSlot<C>,
    counters: Vec<(CounterId, AbortHandle)>,
    next_id: u64,
}

impl<C: ChartInstance> Default for ActivatorResources<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChartInstance> ActivatorResources<C> {
    pub fn new() -> Self {
        Self {
            production: ChartSlot::new(),
            benefits: ChartSlot::new(),
            counters: Vec::new(),
            next_id: 0,
        }
    }

    /// Wraps a counter task so [`release`](Self::release) can cancel it.
    /// The caller spawns the returned future and reports completion with
    /// [`counter_finished`](Self::counter_finished).
    pub fn track_counter<F: Future>(&mut self, task: F) -> (CounterId, Abortable<F>) {
        let id = CounterId(self.next_id);
        self.next_id += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.counters.push((id, handle));
        (id, Abortable::new(task, registration))
    }

    /// Forgets a counter that ran to its goal.
    pub fn counter_finished(&mut self, id: CounterId) -> bool {
        let before = self.counters.len();
        self.counters.retain(|(c, _)| *c != id);
        self.counters.len() != before
    }

    pub fn running_counters(&self) -> usize {
        self.counters.len()
    }

    /// Aborts every running counter and destroys both charts.
    pub fn release(&mut self) -> Released {
        let counters = self.counters.len();
        for (_, handle) in self.counters.drain(..) {
            handle.abort();
        }
        let charts = usize::from(self.production.clear()) + usize::from(self.benefits.clear());
        Released { counters, charts }
    }
}

/// Advances `animation` once per item of `ticks`, showing each value, and
/// returns when the goal is shown or the tick source ends.
pub async fn run_counter<S, F>(mut ticks: S, mut animation: CounterAnimation, mut show: F)
where
    S: Stream + Unpin,
    F: FnMut(&str),
{
    while ticks.next().await.is_some() {
        let Some(tick) = animation.tick() else {
            break;
        };
        show(&tick.text());
        if tick.done {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activator_core::CounterStart;
    use futures::channel::mpsc;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct FakeChart {
        live: Rc<Cell<u32>>,
    }

    impl FakeChart {
        fn new(live: &Rc<Cell<u32>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl ChartInstance for FakeChart {
        fn destroy(self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn animation(goal: i64) -> CounterAnimation {
        match CounterAnimation::start(goal, 2000) {
            CounterStart::Animate { animation, .. } => animation,
            CounterStart::Immediate(_) => panic!("{goal} should animate"),
        }
    }

    #[test]
    fn counter_shows_every_value_then_stops() {
        let mut pool = LocalPool::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let (tx, rx) = mpsc::unbounded::<()>();
        {
            let shown = shown.clone();
            pool.spawner()
                .spawn_local(run_counter(rx, animation(3), move |t| {
                    shown.borrow_mut().push(t.to_string())
                }))
                .unwrap();
        }
        for _ in 0..5 {
            let _ = tx.unbounded_send(());
            pool.run_until_stalled();
        }
        assert_eq!(*shown.borrow(), vec!["1", "2", "3"]);
    }

    #[test]
    fn release_stops_counters_and_destroys_charts() {
        let mut pool = LocalPool::new();
        let live = Rc::new(Cell::new(0));
        let shown = Rc::new(RefCell::new(Vec::new()));
        let mut res: ActivatorResources<FakeChart> = ActivatorResources::new();

        res.production
            .rebuild(|| Ok::<_, ()>(FakeChart::new(&live)))
            .unwrap();
        res.benefits
            .rebuild(|| Ok::<_, ()>(FakeChart::new(&live)))
            .unwrap();

        let (tx, rx) = mpsc::unbounded::<()>();
        let sink = shown.clone();
        let (_, task) = res.track_counter(run_counter(rx, animation(63), move |t| {
            sink.borrow_mut().push(t.to_string())
        }));
        let aborted = Rc::new(Cell::new(false));
        {
            let aborted = aborted.clone();
            pool.spawner()
                .spawn_local(async move { aborted.set(task.await.is_err()) })
                .unwrap();
        }

        tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(*shown.borrow(), vec!["1"]);

        let released = res.release();
        assert_eq!(released, Released { counters: 1, charts: 2 });
        assert_eq!(live.get(), 0);
        assert!(!res.production.is_live());
        assert!(!res.benefits.is_live());

        for _ in 0..3 {
            let _ = tx.unbounded_send(());
            pool.run_until_stalled();
        }
        assert_eq!(*shown.borrow(), vec!["1"]);
        assert!(aborted.get());
        assert_eq!(res.release(), Released { counters: 0, charts: 0 });
    }

    #[test]
    fn finished_counters_are_forgotten() {
        let mut pool = LocalPool::new();
        let mut res: ActivatorResources<FakeChart> = ActivatorResources::new();
        let (tx, rx) = mpsc::unbounded::<()>();
        let (id, task) = res.track_counter(run_counter(rx, animation(2), |_| {}));
        let done = Rc::new(Cell::new(false));
        {
            let done = done.clone();
            pool.spawner()
                .spawn_local(async move { done.set(task.await.is_ok()) })
                .unwrap();
        }
        tx.unbounded_send(()).unwrap();
        tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert!(done.get());

        assert_eq!(res.running_counters(), 1);
        assert!(res.counter_finished(id));
        assert!(!res.counter_finished(id));
        assert_eq!(res.running_counters(), 0);
    }
}
