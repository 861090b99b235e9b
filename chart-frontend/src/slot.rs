/// A live chart that holds rendering resources until destroyed.
pub trait ChartInstance {
    fn destroy(self);
}

/// Zero or one live chart for a single canvas.
///
/// The owning view keeps one slot per canvas. Rebuilding tears the current
/// instance down before the replacement is constructed, so two instances
/// never share the canvas.
pub struct ChartSlot<C: ChartInstance> {
    current: Option<C>,
}

impl<C: ChartInstance> Default for ChartSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChartInstance> ChartSlot<C> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    /// Destroys the current instance, then stores whatever `build` returns.
    /// A failed build leaves the slot empty.
    pub fn rebuild<E>(&mut self, build: impl FnOnce() -> Result<C, E>) -> Result<&C, E> {
        self.clear();
        let chart = build()?;
        Ok(self.current.insert(chart))
    }

    /// Returns true if an instance was destroyed.
    pub fn clear(&mut self) -> bool {
        match self.current.take() {
            Some(chart) => {
                chart.destroy();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeChart {
        id: u32,
        live: Rc<Cell<u32>>,
        destroyed: Rc<Cell<u32>>,
    }

    impl FakeChart {
        fn new(id: u32, live: &Rc<Cell<u32>>, destroyed: &Rc<Cell<u32>>) -> Self {
            live.set(live.get() + 1);
            Self {
                id,
                live: live.clone(),
                destroyed: destroyed.clone(),
            }
        }
    }

    impl ChartInstance for FakeChart {
        fn destroy(self) {
            self.live.set(self.live.get() - 1);
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn rebuild_destroys_before_building() {
        let live = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new();

        for id in 0..5 {
            let built = slot
                .rebuild(|| {
                    // the previous instance must already be gone
                    assert_eq!(live.get(), 0);
                    Ok::<_, ()>(FakeChart::new(id, &live, &destroyed))
                })
                .unwrap();
            assert_eq!(built.id, id);
            assert_eq!(live.get(), 1);
        }
        assert_eq!(destroyed.get(), 4);
    }

    #[test]
    fn failed_build_leaves_slot_empty() {
        let live = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new();
        slot.rebuild(|| Ok::<_, &str>(FakeChart::new(1, &live, &destroyed)))
            .unwrap();

        let res = slot.rebuild(|| Err::<FakeChart, _>("no 2d context"));
        assert!(res.is_err());
        assert!(!slot.is_live());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn clear_releases_the_instance() {
        let live = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new();
        assert!(!slot.clear());
        slot.rebuild(|| Ok::<_, ()>(FakeChart::new(7, &live, &destroyed)))
            .unwrap();
        assert!(slot.is_live());
        assert!(slot.clear());
        assert!(!slot.is_live());
        assert_eq!(live.get(), 0);
        assert!(!slot.clear());
        assert_eq!(destroyed.get(), 1);
    }
}
