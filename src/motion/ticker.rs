//! Animation tasks keyed by (target, channel).
//!
//! Starting a task on a pair that is already animating replaces the old task
//! and continues from the value it last wrote, so two animations never race
//! on one property.

use std::collections::HashMap;
use std::rc::Rc;

use super::easing::Ease;
use super::style::{Channel, StyleTarget, TargetId};
use super::tween::Tween;

type TaskKey = (TargetId, Channel);

struct Task {
    target: Rc<dyn StyleTarget>,
    tween: Tween,
}

#[derive(Default)]
pub struct Ticker {
    tasks: HashMap<TaskKey, Task>,
    values: HashMap<TaskKey, f64>,
}

impl Ticker {
    /// Last value written for the pair, or the channel's rest value.
    pub fn current(&self, id: TargetId, channel: Channel) -> f64 {
        self.values
            .get(&(id, channel))
            .copied()
            .unwrap_or_else(|| channel.rest_value())
    }

    pub fn animate(
        &mut self,
        id: TargetId,
        target: Rc<dyn StyleTarget>,
        channel: Channel,
        to: f64,
        duration_secs: f64,
        ease: Ease,
        now_ms: f64,
    ) {
        let from = self.current(id, channel);
        let tween = Tween::new(from, to, now_ms, duration_secs, ease);
        self.tasks.insert((id, channel), Task { target, tween });
    }

    /// Writes immediately and cancels any running task on the pair.
    pub fn set(&mut self, id: TargetId, target: &dyn StyleTarget, channel: Channel, value: f64) {
        self.tasks.remove(&(id, channel));
        self.values.insert((id, channel), value);
        target.write(channel, value);
    }

    /// Drops every task and remembered value of a target, e.g. on unmount.
    pub fn forget_target(&mut self, id: TargetId) {
        self.tasks.retain(|(target, _), _| *target != id);
        self.values.retain(|(target, _), _| *target != id);
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Advances every task to `now_ms`. Finished tasks write their exact
    /// target and leave the active set; detached targets are dropped.
    pub fn tick(&mut self, now_ms: f64) {
        let values = &mut self.values;
        self.tasks.retain(|key, task| {
            if !task.target.is_attached() {
                return false;
            }
            let value = task.tween.sample(now_ms);
            values.insert(*key, value);
            task.target.write(key.1, value);
            !task.tween.is_complete(now_ms)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::testing::RecordingTarget;

    fn target() -> Rc<RecordingTarget> {
        Rc::new(RecordingTarget::default())
    }

    #[test]
    fn task_converges_and_leaves_active_set() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(1, el.clone(), Channel::X, 30.0, 0.3, Ease::Power2Out, 0.0);
        ticker.tick(150.0);
        assert!(!ticker.is_idle());
        let mid = el.last(Channel::X).unwrap();
        assert!(mid > 0.0 && mid < 30.0);
        ticker.tick(300.0);
        assert!(ticker.is_idle());
        assert_eq!(el.last(Channel::X), Some(30.0));
    }

    #[test]
    fn new_task_replaces_old_and_starts_from_current_value() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(1, el.clone(), Channel::X, 100.0, 1.0, Ease::Linear, 0.0);
        ticker.tick(500.0);
        assert_eq!(ticker.current(1, Channel::X), 50.0);

        ticker.animate(1, el.clone(), Channel::X, 0.0, 1.0, Ease::Linear, 500.0);
        assert_eq!(ticker.len(), 1);
        ticker.tick(1000.0);
        assert_eq!(el.last(Channel::X), Some(25.0));
        ticker.tick(1500.0);
        assert_eq!(el.last(Channel::X), Some(0.0));
        assert!(ticker.is_idle());
    }

    #[test]
    fn channels_of_one_target_animate_independently() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(1, el.clone(), Channel::X, 10.0, 0.2, Ease::Linear, 0.0);
        ticker.animate(1, el.clone(), Channel::Y, -10.0, 0.4, Ease::Linear, 0.0);
        ticker.tick(200.0);
        assert_eq!(ticker.len(), 1);
        assert_eq!(el.last(Channel::X), Some(10.0));
        assert_eq!(el.last(Channel::Y), Some(-5.0));
    }

    #[test]
    fn detached_target_is_skipped_without_error() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(7, el.clone(), Channel::Scale, 2.0, 0.5, Ease::Linear, 0.0);
        el.detached.set(true);
        ticker.tick(100.0);
        assert_eq!(el.count(), 0);
        assert!(ticker.is_idle());
    }

    #[test]
    fn set_cancels_running_task() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(2, el.clone(), Channel::Opacity, 0.0, 1.0, Ease::Linear, 0.0);
        ticker.set(2, &*el, Channel::Opacity, 0.4);
        ticker.tick(900.0);
        assert!(ticker.is_idle());
        assert_eq!(el.last(Channel::Opacity), Some(0.4));
    }

    #[test]
    fn forget_target_clears_tasks_and_memory() {
        let mut ticker = Ticker::default();
        let el = target();
        ticker.animate(3, el.clone(), Channel::X, 5.0, 1.0, Ease::Linear, 0.0);
        ticker.tick(500.0);
        ticker.forget_target(3);
        assert!(ticker.is_idle());
        assert_eq!(ticker.current(3, Channel::X), 0.0);
    }
}
