//! Sign-up form lifecycle: values, focus, validation state, submission

use super::field::{Field, FieldValues, FIELD_COUNT};
use super::rules::{self, FormSnapshot, ValidationResult};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Stored validation results, one per field
#[derive(Debug, Clone)]
pub struct FormState {
    results: [ValidationResult; FIELD_COUNT],
}

impl FormState {
    /// First-mount state: required fields start invalid (no message yet),
    /// optional fields start valid
    pub fn initial() -> Self {
        Self {
            results: std::array::from_fn(|i| initial_result(Field::ALL[i])),
        }
    }

    pub fn get(&self, field: Field) -> &ValidationResult {
        &self.results[field.index()]
    }

    pub fn set(&mut self, field: Field, result: ValidationResult) {
        self.results[field.index()] = result;
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.results[field.index()].valid
    }

    /// True when every submission-gating field is valid
    pub fn required_all_valid(&self) -> bool {
        Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| self.is_valid(*f))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::initial()
    }
}

fn initial_result(field: Field) -> ValidationResult {
    if field.is_required() {
        ValidationResult {
            valid: false,
            message: String::new(),
        }
    } else {
        ValidationResult::ok()
    }
}

/// What currently has keyboard focus inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

/// Display phase of the form
#[derive(Debug, Clone, Copy)]
pub enum FormPhase {
    Editing,
    /// Success card is showing; the form resets itself once the deadline
    /// passes. Replacing the phase is what cancels the pending reset.
    Submitted {
        at: DateTime<Local>,
        reset_deadline: Instant,
    },
}

/// Rejection cue shown when submit is pressed while the form is incomplete
#[derive(Debug, Clone, Copy)]
struct ShakeState {
    started: Instant,
}

impl ShakeState {
    /// How long the cue lasts
    const DURATION: Duration = Duration::from_millis(400);
    /// Peak sideways displacement in terminal cells
    const AMPLITUDE: f32 = 3.0;

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= Self::DURATION
    }

    /// Damped side-to-side offset at the given moment
    fn offset(&self, now: Instant) -> f32 {
        let progress = now.duration_since(self.started).as_secs_f32()
            / Self::DURATION.as_secs_f32();
        let progress = progress.clamp(0.0, 1.0);
        let decay = 1.0 - simple_easing::cubic_out(progress);
        (progress * std::f32::consts::PI * 6.0).sin() * decay * Self::AMPLITUDE
    }
}

/// The sign-up form
#[derive(Debug)]
pub struct SignupForm {
    values: FieldValues,
    form_state: FormState,
    focus: FormFocus,
    phase: FormPhase,
    shake: Option<ShakeState>,
    /// Horizontal offset applied while the rejection cue is active
    pub shake_offset: f32,
}

impl SignupForm {
    /// How long the success card stays up before the form resets
    pub const RESET_DELAY: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            values: FieldValues::default(),
            form_state: FormState::initial(),
            focus: FormFocus::Field(Field::FullName),
            phase: FormPhase::Editing,
            shake: None,
            shake_offset: 0.0,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn result(&self, field: Field) -> &ValidationResult {
        self.form_state.get(field)
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// True when every required field currently holds a valid value;
    /// Phone never participates
    pub fn is_submittable(&self) -> bool {
        self.form_state.required_all_valid()
    }

    /// Label for the submit button under the current aggregate state
    pub fn submit_label(&self) -> &'static str {
        if self.is_submittable() {
            "Create account"
        } else {
            "Fill in required fields"
        }
    }

    /// Insert a character into the focused field and revalidate it
    pub fn input_char(&mut self, c: char) {
        if self.is_submitted() {
            return;
        }
        if let FormFocus::Field(field) = self.focus {
            self.values.push_char(field, c);
            self.revalidate(field);
        }
    }

    /// Delete the last character of the focused field and revalidate it
    pub fn backspace(&mut self) {
        if self.is_submitted() {
            return;
        }
        if let FormFocus::Field(field) = self.focus {
            self.values.pop_char(field);
            self.revalidate(field);
        }
    }

    /// Move focus forward; leaving a field re-runs its validation (blur)
    pub fn focus_next(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.blur_current();
        self.focus = match self.focus {
            FormFocus::Field(field) => {
                let next = field.index() + 1;
                if next < FIELD_COUNT {
                    FormFocus::Field(Field::ALL[next])
                } else {
                    FormFocus::Submit
                }
            }
            FormFocus::Submit => FormFocus::Field(Field::ALL[0]),
        };
    }

    /// Move focus backward; leaving a field re-runs its validation (blur)
    pub fn focus_prev(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.blur_current();
        self.focus = match self.focus {
            FormFocus::Field(field) => {
                if field.index() == 0 {
                    FormFocus::Submit
                } else {
                    FormFocus::Field(Field::ALL[field.index() - 1])
                }
            }
            FormFocus::Submit => FormFocus::Field(Field::ALL[FIELD_COUNT - 1]),
        };
    }

    /// Focus a specific target (mouse); blurs whatever had focus before
    pub fn focus_on(&mut self, focus: FormFocus) {
        if self.is_submitted() || self.focus == focus {
            return;
        }
        self.blur_current();
        self.focus = focus;
    }

    fn blur_current(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.revalidate(field);
        }
    }

    /// Revalidate a field from its current value. Editing the password also
    /// revalidates the confirm field, which depends on it.
    fn revalidate(&mut self, field: Field) {
        let result = rules::validate(
            field,
            self.values.get(field),
            FormSnapshot::new(&self.values),
        );
        self.form_state.set(field, result);

        if field == Field::Password {
            let confirm = rules::validate(
                Field::ConfirmPassword,
                self.values.get(Field::ConfirmPassword),
                FormSnapshot::new(&self.values),
            );
            self.form_state.set(Field::ConfirmPassword, confirm);
        }
    }

    /// Attempt submission. Every field is revalidated from its current value
    /// so a stale stored result can never let an invalid form through. A
    /// rejected submit starts the shake cue and leaves the stored results
    /// untouched.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.is_submitted() {
            return false;
        }

        let snapshot = FormSnapshot::new(&self.values);
        let fresh: [ValidationResult; FIELD_COUNT] = std::array::from_fn(|i| {
            rules::validate(Field::ALL[i], self.values.get(Field::ALL[i]), snapshot)
        });
        let accepted = Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| fresh[f.index()].valid);

        if accepted {
            for (i, result) in fresh.into_iter().enumerate() {
                self.form_state.set(Field::ALL[i], result);
            }
            self.phase = FormPhase::Submitted {
                at: Local::now(),
                reset_deadline: now + Self::RESET_DELAY,
            };
            self.shake = None;
            self.shake_offset = 0.0;
        } else {
            self.shake = Some(ShakeState { started: now });
        }
        accepted
    }

    /// Advance timed state; called from the app tick
    pub fn tick(&mut self, now: Instant) {
        if let Some(shake) = self.shake {
            if shake.is_expired(now) {
                self.shake = None;
                self.shake_offset = 0.0;
            } else {
                self.shake_offset = shake.offset(now);
            }
        }

        if let FormPhase::Submitted { reset_deadline, .. } = self.phase {
            if now >= reset_deadline {
                self.reset();
            }
        }
    }

    /// Whole seconds left on the success card, rounded up so the countdown
    /// starts at the full delay and never shows zero while still submitted
    pub fn reset_countdown(&self, now: Instant) -> u64 {
        match self.phase {
            FormPhase::Submitted { reset_deadline, .. } => {
                let remaining = reset_deadline.saturating_duration_since(now);
                remaining.as_secs_f32().ceil() as u64
            }
            FormPhase::Editing => 0,
        }
    }

    /// Clear values and return every field to its first-mount state. Also
    /// cancels a pending scheduled reset, since the phase is replaced.
    pub fn reset(&mut self) {
        self.values.clear_all();
        self.form_state = FormState::initial();
        self.focus = FormFocus::Field(Field::FullName);
        self.phase = FormPhase::Editing;
        self.shake = None;
        self.shake_offset = 0.0;
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
