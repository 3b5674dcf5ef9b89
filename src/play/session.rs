//! Shot resolution for one hole
//!
//! A shot goes through two calls. [`GameSession::prepare_shot`] settles the
//! lie and distance cap and hands back a [`ShotContext`] for whatever
//! decides the shot's distance and direction. [`GameSession::resolve_shot`]
//! flies the ball, classifies the landing, applies any out-of-bounds drop
//! and only then updates the ball.

use super::shot::{ShotContext, ShotIntent, ShotParameters, ShotPhase, ShotReport};
use crate::config::PhysicsConfig;
use crate::course::{Hole, classify, is_out_of_bounds};
use crate::domain::{BallState, Club, FlightPoint, Lie, SurfaceLabel};
use crate::error::{HoleError, Result};
use crate::flight::{LaunchParams, find_boundary_entry, simulate};
use crate::geometry::{bearing, distance_yards, offset_point};

/// Supplies distance and direction for a prepared shot
pub trait ShotParameterSource {
    fn shot_parameters(&mut self, context: &ShotContext) -> Result<ShotParameters>;
}

impl<F> ShotParameterSource for F
where
    F: FnMut(&ShotContext) -> Result<ShotParameters>,
{
    fn shot_parameters(&mut self, context: &ShotContext) -> Result<ShotParameters> {
        self(context)
    }
}

/// Club carry after the lie penalty, whole yards
fn max_distance(club: Club, lie: Lie) -> f64 {
    (club.base_distance() * lie.distance_multiplier()).round()
}

#[derive(Debug, Clone)]
pub struct GameSession {
    hole: Hole,
    physics: PhysicsConfig,
    ball: BallState,
    first_shot: bool,
    finished: bool,
    penalty_strokes: u32,
}

impl GameSession {
    pub fn new(hole: Hole) -> Self {
        Self::with_physics(hole, PhysicsConfig::default())
    }

    pub fn with_physics(hole: Hole, physics: PhysicsConfig) -> Self {
        let ball = BallState::on_tee(hole.tee);
        Self {
            hole,
            physics,
            ball,
            first_shot: true,
            finished: false,
            penalty_strokes: 0,
        }
    }

    pub fn hole(&self) -> &Hole {
        &self.hole
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn penalty_strokes(&self) -> u32 {
        self.penalty_strokes
    }

    pub fn distance_to_pin(&self) -> f64 {
        distance_yards(self.ball.position, self.hole.pin)
    }

    /// Lie for the next shot; the opening shot is always from the tee
    pub fn current_lie(&self) -> Lie {
        if self.first_shot {
            Lie::Tee
        } else {
            Lie::from_surface(classify(self.ball.position, &self.hole.surfaces))
        }
    }

    /// Put the ball back on the tee
    pub fn restart(&mut self) {
        self.ball = BallState::on_tee(self.hole.tee);
        self.first_shot = true;
        self.finished = false;
        self.penalty_strokes = 0;
    }

    pub fn prepare_shot(&self, intent: &ShotIntent) -> Result<ShotContext> {
        if self.finished {
            return Err(HoleError::HoleFinished);
        }
        let mut phases = vec![ShotPhase::AwaitingInput];

        let lie = self.current_lie();
        let max_distance = max_distance(intent.club, lie);
        phases.push(ShotPhase::LieDetermined);

        tracing::debug!(
            club = %intent.club,
            ?lie,
            max_distance,
            "lie determined"
        );

        Ok(ShotContext {
            stroke: self.ball.stroke_count + 1,
            origin: self.ball.position,
            lie,
            club: intent.club,
            max_distance_yards: max_distance,
            distance_to_pin_yards: self.distance_to_pin(),
            aim_offset_deg: intent.aim_offset_deg,
            wind: intent.wind,
            description: intent.description.clone(),
            phases,
        })
    }

    /// Play a prepared shot with externally chosen distance and direction
    ///
    /// The ball is only updated once the whole shot has resolved; on error
    /// the session is left exactly as it was. Lie and distance cap are
    /// taken from the session, not from the context.
    pub fn resolve_shot(
        &mut self,
        context: &ShotContext,
        params: ShotParameters,
    ) -> Result<ShotReport> {
        if self.finished {
            return Err(HoleError::HoleFinished);
        }
        if context.origin != self.ball.position || context.stroke != self.ball.stroke_count + 1 {
            return Err(HoleError::StaleShotContext);
        }

        let mut phases = context.phases.clone();
        let start = self.ball.position;
        let surfaces = &self.hole.surfaces;

        let lie = self.current_lie();
        let max_distance = max_distance(context.club, lie);
        let distance = params.distance.min(max_distance);
        let aim = bearing(start, self.hole.pin) + params.direction.to_radians();
        let target = offset_point(start, aim, distance);
        let power = if max_distance > 0.0 {
            (distance.abs() / max_distance).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let launch = LaunchParams {
            power,
            launch_angle_deg: context.club.launch_angle_deg(),
            wind_speed_mph: context.wind.speed_mph,
            wind_dir_deg: context.wind.direction_deg,
        };
        let flight = simulate(start, target, &launch, &self.physics)?;
        phases.push(ShotPhase::FlightComputed);

        let landing = flight
            .landing()
            .map(FlightPoint::ground)
            .unwrap_or(start);
        let outcome = classify(landing, surfaces);
        phases.push(ShotPhase::OutcomeResolved);

        let (resting, boundary_entry, penalty) = if outcome == SurfaceLabel::Ob {
            let entry = find_boundary_entry(start, landing, |p| is_out_of_bounds(p, surfaces));
            phases.push(ShotPhase::BoundaryCorrected);
            tracing::debug!(%landing, %entry, "out of bounds, dropping at entry");
            (entry, Some(entry), 1)
        } else {
            (landing, None, 0)
        };
        phases.push(ShotPhase::Done);

        let resting_surface = if boundary_entry.is_some() {
            classify(resting, surfaces)
        } else {
            outcome
        };
        let ball = BallState {
            position: resting,
            lie: Lie::from_surface(resting_surface),
            stroke_count: self.ball.stroke_count + 1 + penalty,
        };
        let hole_finished = outcome == SurfaceLabel::Green;

        self.ball = ball;
        self.first_shot = false;
        self.finished = hole_finished;
        self.penalty_strokes += penalty;

        let distance_to_pin = self.distance_to_pin();
        tracing::debug!(
            stroke = context.stroke,
            %outcome,
            distance_to_pin,
            "shot resolved"
        );

        Ok(ShotReport {
            stroke: context.stroke,
            club: context.club,
            played_from: lie,
            outcome,
            target,
            flight,
            landing,
            boundary_entry,
            penalty_strokes: penalty,
            ball,
            distance_to_pin_yards: distance_to_pin,
            hole_finished,
            phases,
        })
    }

    /// Prepare, ask `source` for parameters, and resolve in one go
    pub fn take_shot<S>(&mut self, intent: &ShotIntent, source: &mut S) -> Result<ShotReport>
    where
        S: ShotParameterSource + ?Sized,
    {
        let context = self.prepare_shot(intent)?;
        let params = source.shot_parameters(&context)?;
        self.resolve_shot(&context, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, SurfaceSet};
    use geo::{Polygon, polygon};

    fn rect(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Polygon<f64> {
        polygon![
            (x: min_lon, y: min_lat),
            (x: max_lon, y: min_lat),
            (x: max_lon, y: max_lat),
            (x: min_lon, y: max_lat),
        ]
    }

    /// Tee at the origin, pin due east, OB strip along the north side
    fn hole_with_pin(pin_lon: f64) -> Hole {
        let surfaces = SurfaceSet::builder()
            .with(SurfaceLabel::Fairway, rect(-0.0004, 0.0008, 0.0004, 0.0026))
            .with(
                SurfaceLabel::Green,
                rect(-0.0003, pin_lon - 0.0002, 0.0003, pin_lon + 0.0003),
            )
            .with(SurfaceLabel::Ob, rect(0.0002, -0.001, 0.002, 0.004))
            .build();
        Hole {
            number: Some(1),
            par: Some(4),
            yards: Some(365),
            tee: GeoPoint::new(0.0, 0.0),
            pin: GeoPoint::new(0.0, pin_lon),
            surfaces,
        }
    }

    fn play(session: &mut GameSession, club: Club, distance: f64, direction: f64) -> ShotReport {
        let context = session.prepare_shot(&ShotIntent::new(club)).unwrap();
        session
            .resolve_shot(&context, ShotParameters::new(distance, direction))
            .unwrap()
    }

    #[test]
    fn test_first_shot_from_tee() {
        let session = GameSession::new(hole_with_pin(0.003));
        let context = session.prepare_shot(&ShotIntent::new(Club::Driver)).unwrap();

        assert_eq!(context.lie, Lie::Tee);
        assert_eq!(context.max_distance_yards, 275.0);
        assert_eq!(context.stroke, 1);
        assert!(context.distance_to_pin_yards > 300.0);
    }

    #[test]
    fn test_drive_to_fairway() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let report = play(&mut session, Club::Driver, 250.0, 0.0);

        assert_eq!(report.outcome, SurfaceLabel::Fairway);
        assert_eq!(report.ball.lie, Lie::Fairway);
        assert_eq!(report.ball.stroke_count, 1);
        assert_eq!(report.penalty_strokes, 0);
        assert!(report.boundary_entry.is_none());
        assert_eq!(
            report.phases,
            vec![
                ShotPhase::AwaitingInput,
                ShotPhase::LieDetermined,
                ShotPhase::FlightComputed,
                ShotPhase::OutcomeResolved,
                ShotPhase::Done,
            ]
        );
        assert_eq!(*session.ball(), report.ball);

        // Second shot is played from the classified lie
        let context = session.prepare_shot(&ShotIntent::new(Club::PitchingWedge)).unwrap();
        assert_eq!(context.lie, Lie::Fairway);
        assert_eq!(context.max_distance_yards, 124.0);
        assert_eq!(context.stroke, 2);
    }

    #[test]
    fn test_out_of_bounds_drop() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let report = play(&mut session, Club::Driver, 100.0, 90.0);

        assert_eq!(report.outcome, SurfaceLabel::Ob);
        assert_eq!(report.penalty_strokes, 1);
        assert_eq!(report.ball.stroke_count, 2);
        assert!(report.phases.contains(&ShotPhase::BoundaryCorrected));

        let entry = report.boundary_entry.unwrap();
        assert_eq!(report.ball.position, entry);
        assert!(entry.latitude < 0.0002 && entry.latitude > 0.00019);
        assert!(entry.latitude < report.landing.latitude);
        assert_eq!(report.ball.lie, Lie::Rough);
        assert_eq!(session.penalty_strokes(), 1);
    }

    #[test]
    fn test_wedge_onto_green_finishes_hole() {
        let mut session = GameSession::new(hole_with_pin(0.00117));
        let report = play(&mut session, Club::PitchingWedge, 130.0, 0.0);

        assert_eq!(report.outcome, SurfaceLabel::Green);
        assert!(report.hole_finished);
        assert!(session.is_finished());
        assert!(report.distance_to_pin_yards < 10.0);

        let err = session
            .prepare_shot(&ShotIntent::new(Club::LobWedge))
            .unwrap_err();
        assert!(matches!(err, HoleError::HoleFinished));

        session.restart();
        assert!(!session.is_finished());
        assert_eq!(session.ball().position, session.hole().tee);
        assert_eq!(session.ball().stroke_count, 0);
        assert_eq!(session.current_lie(), Lie::Tee);
    }

    #[test]
    fn test_zero_distance_stays_put() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let report = play(&mut session, Club::Driver, 0.0, 0.0);

        assert!(report.flight.is_empty());
        assert_eq!(report.landing, GeoPoint::new(0.0, 0.0));
        assert_eq!(report.ball.stroke_count, 1);
        assert_eq!(report.outcome, SurfaceLabel::Rough);
        assert_eq!(session.current_lie(), Lie::Rough);
    }

    #[test]
    fn test_distance_is_capped() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let report = play(&mut session, Club::PitchingWedge, 500.0, 0.0);

        // 130 yards along the 0.000009 degree-per-yard scale
        assert!((report.target.longitude - 130.0 * 0.000009).abs() < 1e-12);
        assert_eq!(report.target.latitude, 0.0);
    }

    #[test]
    fn test_phases_recorded_as_they_happen() {
        let session = GameSession::new(hole_with_pin(0.003));
        let context = session.prepare_shot(&ShotIntent::new(Club::Driver)).unwrap();
        assert_eq!(
            context.phases,
            vec![ShotPhase::AwaitingInput, ShotPhase::LieDetermined]
        );
    }

    #[test]
    fn test_edited_context_cannot_lift_distance_cap() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let mut context = session
            .prepare_shot(&ShotIntent::new(Club::PitchingWedge))
            .unwrap();
        context.max_distance_yards = 10_000.0;
        context.lie = Lie::Fairway;

        let report = session
            .resolve_shot(&context, ShotParameters::new(500.0, 0.0))
            .unwrap();

        // Still capped at 130 from the tee
        assert!((report.target.longitude - 130.0 * 0.000009).abs() < 1e-12);
        assert_eq!(report.played_from, Lie::Tee);
    }

    #[test]
    fn test_edited_club_uses_its_own_cap() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let mut context = session
            .prepare_shot(&ShotIntent::new(Club::LobWedge))
            .unwrap();
        context.club = Club::PitchingWedge;

        let report = session
            .resolve_shot(&context, ShotParameters::new(500.0, 0.0))
            .unwrap();

        assert_eq!(report.club, Club::PitchingWedge);
        assert!((report.target.longitude - 130.0 * 0.000009).abs() < 1e-12);
    }

    #[test]
    fn test_stale_context_rejected() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let context = session.prepare_shot(&ShotIntent::new(Club::Driver)).unwrap();
        session
            .resolve_shot(&context, ShotParameters::new(250.0, 0.0))
            .unwrap();

        let err = session
            .resolve_shot(&context, ShotParameters::new(250.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, HoleError::StaleShotContext));
    }

    #[test]
    fn test_failed_flight_leaves_ball_untouched() {
        let physics = PhysicsConfig {
            max_steps: 3,
            ..PhysicsConfig::default()
        };
        let mut session = GameSession::with_physics(hole_with_pin(0.003), physics);
        let before = *session.ball();
        let context = session.prepare_shot(&ShotIntent::new(Club::Driver)).unwrap();

        let err = session
            .resolve_shot(&context, ShotParameters::new(250.0, 0.0))
            .unwrap_err();

        assert!(matches!(err, HoleError::SimulationBoundsExceeded { steps: 3 }));
        assert_eq!(*session.ball(), before);
        assert_eq!(session.current_lie(), Lie::Tee);
    }

    #[test]
    fn test_take_shot_with_closure_source() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let mut seen = Vec::new();
        let mut source = |context: &ShotContext| -> Result<ShotParameters> {
            seen.push(context.lie);
            Ok(ShotParameters::new(250.0, 0.0))
        };

        session
            .take_shot(&ShotIntent::new(Club::Driver), &mut source)
            .unwrap();
        session
            .take_shot(&ShotIntent::new(Club::Wood3), &mut source)
            .unwrap();

        assert_eq!(seen, vec![Lie::Tee, Lie::Fairway]);
        assert_eq!(session.ball().stroke_count, 2);
    }

    #[test]
    fn test_source_error_propagates() {
        let mut session = GameSession::new(hole_with_pin(0.003));
        let mut source = |_: &ShotContext| -> Result<ShotParameters> {
            Err(HoleError::ShotSource("offline".into()))
        };

        let err = session
            .take_shot(&ShotIntent::new(Club::Driver), &mut source)
            .unwrap_err();
        assert!(matches!(err, HoleError::ShotSource(_)));
        assert_eq!(session.ball().stroke_count, 0);
    }
}
