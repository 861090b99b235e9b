/// Outcome of starting a counter for a given goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterStart {
    /// Goal was zero or negative: write the text once and run no timer.
    Immediate(String),
    /// Tick `animation` every `step_ms` milliseconds.
    Animate {
        animation: CounterAnimation,
        step_ms: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTick {
    pub value: i64,
    pub done: bool,
}

impl CounterTick {
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

/// Count-up from zero to a fixed goal, one unit per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    count: i64,
}

impl CounterAnimation {
    /// Plans the animation for `target` spread over `duration_ms`.
    ///
    /// The per-tick interval is `|floor(duration / target)|`. Goals past the
    /// duration floor to a zero interval, which the browser clamps to its
    /// minimum timer resolution.
    pub fn start(target: i64, duration_ms: u32) -> CounterStart {
        if target <= 0 {
            return CounterStart::Immediate("0".to_string());
        }
        let step = (duration_ms as i64).div_euclid(target).unsigned_abs();
        CounterStart::Animate {
            animation: CounterAnimation { target, count: 0 },
            step_ms: step.min(u32::MAX as u64) as u32,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.count >= self.target
    }

    /// Advances by one. Returns `None` once the goal has been reached.
    pub fn tick(&mut self) -> Option<CounterTick> {
        if self.is_finished() {
            return None;
        }
        self.count += 1;
        Some(CounterTick {
            value: self.count,
            done: self.is_finished(),
        })
    }
}

/// Reads a counter goal from its attribute value. Anything that isn't a
/// finite number counts as zero; fractional goals truncate.
pub fn parse_counter_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    if let Ok(v) = raw.parse::<i64>() {
        return v;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animate(target: i64) -> (CounterAnimation, u32) {
        match CounterAnimation::start(target, 2000) {
            CounterStart::Animate { animation, step_ms } => (animation, step_ms),
            other => panic!("expected animation, got {other:?}"),
        }
    }

    #[test]
    fn counts_by_one_and_stops_at_target() {
        let (mut anim, _) = animate(63);
        let mut last = 0;
        let mut ticks = 0;
        while let Some(t) = anim.tick() {
            assert_eq!(t.value, last + 1);
            last = t.value;
            ticks += 1;
            if t.done {
                break;
            }
        }
        assert_eq!(last, 63);
        assert_eq!(ticks, 63);
        assert!(anim.tick().is_none());
        assert!(anim.is_finished());
    }

    #[test]
    fn done_flag_only_on_last_tick() {
        let (mut anim, _) = animate(3);
        assert!(!anim.tick().unwrap().done);
        assert!(!anim.tick().unwrap().done);
        let last = anim.tick().unwrap();
        assert!(last.done);
        assert_eq!(last.text(), "3");
    }

    #[test]
    fn interval_is_floored_duration_over_target() {
        assert_eq!(animate(63).1, 31);
        assert_eq!(animate(100).1, 20);
        assert_eq!(animate(2000).1, 1);
        assert_eq!(animate(5000).1, 0);
    }

    #[test]
    fn non_positive_targets_skip_animation() {
        assert_eq!(
            CounterAnimation::start(0, 2000),
            CounterStart::Immediate("0".into())
        );
        assert_eq!(
            CounterAnimation::start(-5, 2000),
            CounterStart::Immediate("0".into())
        );
    }

    #[test]
    fn parses_attribute_values() {
        assert_eq!(parse_counter_target(Some("63")), 63);
        assert_eq!(parse_counter_target(Some(" 2000 ")), 2000);
        assert_eq!(parse_counter_target(Some("12.9")), 12);
        assert_eq!(parse_counter_target(Some("abc")), 0);
        assert_eq!(parse_counter_target(Some("")), 0);
        assert_eq!(parse_counter_target(Some("NaN")), 0);
        assert_eq!(parse_counter_target(None), 0);
    }
}
