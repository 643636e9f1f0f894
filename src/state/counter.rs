//! Counter widget state

/// Simple increment/decrement counter
#[derive(Debug, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = Counter::default();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 2);
        counter.decrement();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_goes_negative() {
        let mut counter = Counter::default();
        counter.decrement();
        assert_eq!(counter.value(), -1);
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        counter.reset();
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut counter = Counter { value: i64::MAX };
        counter.increment();
        assert_eq!(counter.value(), i64::MAX);

        let mut counter = Counter { value: i64::MIN };
        counter.decrement();
        assert_eq!(counter.value(), i64::MIN);
    }
}
