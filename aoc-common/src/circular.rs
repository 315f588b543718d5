//! A numbered dial that wraps around and counts how often it passes zero.

use std::fmt;

use crate::error::CommonError;

/// Positions `0..size` arranged in a circle.
///
/// Every move reports how many times the dial pointed at zero along the
/// way, landing on zero included. Totals are kept in
/// [`CircularRange::crossed_zero`] and [`CircularRange::stopped_on_zero`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularRange {
    size: i64,
    position: i64,
    crossed_zero: i64,
    stopped_on_zero: i64,
}

impl Default for CircularRange {
    /// A 100-position dial starting at 50.
    fn default() -> Self {
        Self {
            size: 100,
            position: 50,
            crossed_zero: 0,
            stopped_on_zero: 0,
        }
    }
}

impl CircularRange {
    /// # Errors
    ///
    /// [`CommonError::InvalidInput`] unless `size > 0` and
    /// `0 <= start < size`.
    pub fn new(size: i64, start: i64) -> Result<Self, CommonError> {
        if size <= 0 {
            return Err(CommonError::InvalidInput(format!(
                "dial size must be positive, got {}",
                size
            )));
        }
        let mut dial = Self {
            size,
            ..Self::default()
        };
        dial.reset(start)?;
        Ok(dial)
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Times the dial has pointed at zero during any move.
    pub fn crossed_zero(&self) -> i64 {
        self.crossed_zero
    }

    /// Moves that ended on zero.
    pub fn stopped_on_zero(&self) -> i64 {
        self.stopped_on_zero
    }

    /// Turns towards higher numbers; returns the zero crossings of this move.
    pub fn move_forward(&mut self, distance: i64) -> Result<i64, CommonError> {
        check_distance(distance)?;
        let unwrapped = self.position.checked_add(distance).ok_or_else(|| {
            CommonError::InvalidInput(format!(
                "moving {} from {} overflows the dial",
                distance, self.position
            ))
        })?;
        let crossings = unwrapped / self.size;
        self.land(unwrapped, crossings);
        Ok(crossings)
    }

    /// Turns towards lower numbers; returns the zero crossings of this move.
    pub fn move_backward(&mut self, distance: i64) -> Result<i64, CommonError> {
        check_distance(distance)?;
        let crossings = if self.position == 0 {
            // leaving zero does not count
            distance / self.size
        } else if distance >= self.position {
            (distance - self.position) / self.size + 1
        } else {
            0
        };
        self.land(self.position - distance, crossings);
        Ok(crossings)
    }

    fn land(&mut self, unwrapped: i64, crossings: i64) {
        self.position = unwrapped.rem_euclid(self.size);
        self.crossed_zero += crossings;
        if self.position == 0 {
            self.stopped_on_zero += 1;
        }
    }

    /// Moves to `position` and clears both counters.
    pub fn reset(&mut self, position: i64) -> Result<(), CommonError> {
        if !(0..self.size).contains(&position) {
            return Err(CommonError::InvalidInput(format!(
                "position {} is outside 0..{}",
                position, self.size
            )));
        }
        self.position = position;
        self.crossed_zero = 0;
        self.stopped_on_zero = 0;
        Ok(())
    }
}

fn check_distance(distance: i64) -> Result<(), CommonError> {
    if distance > 0 {
        Ok(())
    } else {
        Err(CommonError::InvalidInput(format!(
            "distance must be positive, got {}",
            distance
        )))
    }
}

impl fmt::Display for CircularRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} crossed zero {} stopped on zero {}",
            self.position,
            self.size - 1,
            self.crossed_zero,
            self.stopped_on_zero
        )
    }
}
