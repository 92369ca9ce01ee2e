//! The ordered rule table applied on every pulse.
//!
//! Each rule pairs a [`Guard`] with a pure action over a [`Pulse`]. A pulse
//! is folded through the table in order, so a rule sees whatever the rules
//! before it committed in the same tick. Reordering the table changes the
//! controller's behavior.

use crate::controller::ControllerState;
use crate::core::Guard;
use crate::vehicle::VehicleSnapshot;

/// Activation speed (km/h) used when none is configured.
pub const DEFAULT_ACTIVATION_SPEED: f64 = 50.0;

/// Speed (km/h) that corresponds to a throttle position of 1.0.
pub const SPEED_TO_THROTTLE_DIVISOR: f64 = 50.0;

/// Speed gained per tick of button acceleration: 2 m/s in km/h.
pub const ACCEL_STEP_KMH: f64 = 7.2;

/// Throttle needed to hold `speed`.
pub fn cruise_throttle(speed: f64) -> f64 {
    speed / SPEED_TO_THROTTLE_DIVISOR
}

/// The value threaded through the rule table within one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pulse {
    pub snapshot: VehicleSnapshot,
    pub state: ControllerState,
}

/// Pure effect of a rule.
pub type Action = fn(Pulse) -> Pulse;

/// A named, guarded step of the transition function.
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    guard: Guard<Pulse>,
    then: Action,
    otherwise: Option<Action>,
}

impl Rule {
    pub fn new(name: &'static str, guard: Guard<Pulse>, then: Action) -> Self {
        Self {
            name,
            guard,
            then,
            otherwise: None,
        }
    }

    /// Action to run when the guard rejects the pulse.
    pub fn otherwise(mut self, action: Action) -> Self {
        self.otherwise = Some(action);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to a pulse, returning the next intermediate value.
    pub fn apply(&self, pulse: Pulse) -> Pulse {
        if self.guard.check(&pulse) {
            tracing::trace!(rule = self.name, "rule fired");
            (self.then)(pulse)
        } else {
            match self.otherwise {
                Some(action) => action(pulse),
                None => pulse,
            }
        }
    }
}

/// Engine running, brake released and at or above the activation speed.
fn gate_open(snapshot: &VehicleSnapshot, activation_speed: f64) -> bool {
    snapshot.engine_on && snapshot.speed >= activation_speed && !snapshot.brake_on()
}

/// Build the rule table for a given activation speed.
pub fn rulebook(activation_speed: f64) -> Vec<Rule> {
    vec![
        // Resumed cruising stays engaged without the start-CCS indicator.
        Rule::new(
            "engage",
            Guard::new(move |p: &Pulse| {
                gate_open(&p.snapshot, activation_speed)
                    && (p.snapshot.start_ccs || (p.state.is_active && p.state.resumed))
            }),
            engage,
        )
        .otherwise(manual),
        Rule::new(
            "explicit_stop",
            Guard::new(|p: &Pulse| p.snapshot.stop_ccs),
            explicit_stop,
        ),
        Rule::new(
            "brake_cutout",
            Guard::new(|p: &Pulse| p.snapshot.brake_on() && p.state.is_active),
            cut_out,
        ),
        Rule::new(
            "engine_cutout",
            Guard::new(|p: &Pulse| !p.snapshot.engine_on && p.state.is_active),
            cut_out,
        ),
        Rule::new(
            "lapse",
            Guard::new(move |p: &Pulse| {
                p.state.is_active
                    && !p.snapshot.start_ccs
                    && !(p.state.resumed && gate_open(&p.snapshot, activation_speed))
            }),
            lapse,
        ),
        // Must precede begin_pedal so it never fires on the tick the pedal goes down.
        Rule::new(
            "sustain_pedal",
            Guard::new(|p: &Pulse| {
                p.state.accelerating_by_pedal
                    && p.snapshot.accelerator_on()
                    && !p.snapshot.start_accelerating
            }),
            sustain_pedal,
        ),
        Rule::new(
            "begin_pedal",
            Guard::new(|p: &Pulse| {
                p.state.is_active
                    && p.snapshot.accelerator_on()
                    && !p.snapshot.start_accelerating
                    && !p.state.accelerating_by_pedal
            }),
            begin_pedal,
        ),
        Rule::new(
            "pedal_with_button",
            Guard::new(|p: &Pulse| p.snapshot.accelerator_on() && p.snapshot.start_accelerating),
            pedal_with_button,
        ),
        Rule::new(
            "end_pedal",
            Guard::new(|p: &Pulse| {
                p.state.accelerating_by_pedal && p.snapshot.accelerator_position == 0.0
            }),
            end_pedal,
        ),
        Rule::new(
            "button_ramp",
            Guard::new(|p: &Pulse| p.snapshot.start_accelerating),
            button_ramp,
        ),
        Rule::new(
            "end_button_ramp",
            Guard::new(|p: &Pulse| p.snapshot.stop_accelerating),
            end_button_ramp,
        ),
        Rule::new(
            "resume",
            Guard::new(|p: &Pulse| !p.snapshot.start_ccs && p.snapshot.resume),
            resume,
        ),
    ]
}

fn engage(Pulse { snapshot, state }: Pulse) -> Pulse {
    if state.is_active {
        return Pulse {
            snapshot: VehicleSnapshot {
                throttle_position: state.recorded_cruise_throttle,
                ..snapshot
            },
            state: ControllerState {
                resumed: state.resumed && !snapshot.start_ccs,
                ..state
            },
        };
    }

    let throttle = cruise_throttle(snapshot.speed);
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: throttle,
            ..snapshot
        },
        state: ControllerState {
            is_active: true,
            has_cruised: true,
            recorded_cruise_throttle: throttle,
            ..state
        },
    }
}

fn manual(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: snapshot.accelerator_position,
            ..snapshot.release_control_buttons()
        },
        state,
    }
}

fn explicit_stop(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: snapshot.accelerator_position,
            ..snapshot.release_control_buttons()
        },
        state: ControllerState {
            recorded_cruise_throttle: snapshot.throttle_position,
            ..state.disengage()
        },
    }
}

fn cut_out(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: 0.0,
            ..snapshot.release_buttons()
        },
        state: state.disengage(),
    }
}

fn lapse(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot,
        state: state.disengage(),
    }
}

/// Throttle the pedal hands back to: never below the set-point.
fn pedal_floor(state: &ControllerState) -> f64 {
    state.pre_pedal_throttle.max(state.recorded_cruise_throttle)
}

fn sustain_pedal(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: snapshot.accelerator_position.max(pedal_floor(&state)),
            ..snapshot
        },
        state,
    }
}

fn begin_pedal(Pulse { snapshot, state }: Pulse) -> Pulse {
    let held = snapshot.throttle_position;
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: snapshot.accelerator_position.max(held),
            ..snapshot
        },
        state: ControllerState {
            accelerating_by_pedal: true,
            pre_pedal_throttle: held,
            ..state
        },
    }
}

fn pedal_with_button(Pulse { snapshot, state }: Pulse) -> Pulse {
    let throttle = cruise_throttle(snapshot.speed).max(snapshot.accelerator_position);
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: throttle,
            ..snapshot
        },
        state: ControllerState {
            pre_pedal_throttle: throttle,
            ..state
        },
    }
}

fn end_pedal(Pulse { snapshot, state }: Pulse) -> Pulse {
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: pedal_floor(&state),
            ..snapshot
        },
        state: ControllerState {
            accelerating_by_pedal: false,
            ..state
        },
    }
}

fn button_ramp(Pulse { snapshot, state }: Pulse) -> Pulse {
    let throttle = cruise_throttle(snapshot.speed + ACCEL_STEP_KMH);
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: throttle,
            ..snapshot
        },
        state: ControllerState {
            last_button_accel_throttle: throttle,
            ..state
        },
    }
}

fn end_button_ramp(Pulse { snapshot, state }: Pulse) -> Pulse {
    let released = VehicleSnapshot {
        start_accelerating: false,
        stop_accelerating: false,
        ..snapshot
    };

    // Zero means no ramp ran since the last engagement; keep the set-point.
    let reached = state.last_button_accel_throttle;
    if reached <= 0.0 {
        return Pulse {
            snapshot: released,
            state,
        };
    }

    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: reached,
            ..released
        },
        state: ControllerState {
            recorded_cruise_throttle: reached,
            pre_pedal_throttle: if state.accelerating_by_pedal {
                reached
            } else {
                state.pre_pedal_throttle
            },
            ..state
        },
    }
}

fn resume(Pulse { snapshot, state }: Pulse) -> Pulse {
    let snapshot = VehicleSnapshot {
        resume: false,
        ..snapshot
    };
    if !snapshot.engine_on || snapshot.brake_on() {
        return Pulse { snapshot, state };
    }

    let throttle = if state.has_cruised {
        state.recorded_cruise_throttle
    } else {
        cruise_throttle(snapshot.speed)
    };
    Pulse {
        snapshot: VehicleSnapshot {
            throttle_position: throttle,
            ..snapshot
        },
        state: ControllerState {
            is_active: true,
            resumed: true,
            has_cruised: true,
            recorded_cruise_throttle: throttle,
            ..state
        },
    }
}
