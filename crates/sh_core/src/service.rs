//! Engine facade consumed by the API layer.
//!
//! One [`TeamService`] per deployment wires the storage collaborator, the
//! name sources, and the sport variant together. All operations are
//! single-request and reentrant; the service holds no per-team state.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, RosterError, StorageError, SubmitError};
use crate::lineup::{validate_batting_order, validate_bowling_rotation};
use crate::models::lineup::{BattingOrder, BowlingRotation};
use crate::models::player::{Player, PlayerAttributes, PlayerId, Position, TeamId};
use crate::models::squad::{Squad, SquadSummary};
use crate::names::{NameDirectory, NamePool, NameSource, StaticNameList};
use crate::roster::stat_model::{draw_age, draw_morale, SportVariant};
use crate::roster::SquadGenerator;
use crate::storage::SquadStore;

/// Request shape for single-player creation (admin path). Omitted stats
/// are drawn from the variant's stat model.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub team_id: TeamId,
    pub name: String,
    pub position: Position,
    pub age: Option<u8>,
    pub morale: Option<u8>,
    pub attributes: Option<PlayerAttributes>,
}

pub struct TeamService {
    store: Arc<dyn SquadStore>,
    remote_names: Option<Arc<dyn NameSource>>,
    fallback_names: StaticNameList,
    variant: SportVariant,
    config: GeneratorConfig,
}

impl TeamService {
    pub fn new(store: Arc<dyn SquadStore>, variant: SportVariant) -> Self {
        TeamService {
            store,
            remote_names: None,
            fallback_names: StaticNameList::new(),
            variant,
            config: GeneratorConfig::default(),
        }
    }

    /// Attach a remote name provider; without one, generation uses the
    /// static list directly.
    pub fn with_remote_names(mut self, source: Arc<dyn NameSource>) -> Self {
        self.remote_names = Some(source);
        self
    }

    pub fn with_fallback_names(mut self, fallback: StaticNameList) -> Self {
        self.fallback_names = fallback;
        self
    }

    pub fn with_generator_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn variant(&self) -> SportVariant {
        self.variant
    }

    fn generator(&self) -> SquadGenerator<'_> {
        SquadGenerator::with_config(
            self.store.as_ref(),
            NameDirectory::new(self.remote_names.as_deref(), &self.fallback_names),
            self.variant,
            self.config.clone(),
        )
    }

    /// Build and persist the full squad for a freshly created team.
    pub fn generate_squad(&self, team_id: TeamId) -> Result<Vec<Player>, GenerationError> {
        self.generator().generate_squad(team_id)
    }

    /// Reproducible squad generation for tooling and tests.
    pub fn generate_squad_seeded(
        &self,
        team_id: TeamId,
        seed: u64,
    ) -> Result<Vec<Player>, GenerationError> {
        self.generator().generate_squad_seeded(team_id, seed)
    }

    fn load_squad(&self, team_id: TeamId) -> Result<Squad, StorageError> {
        Ok(Squad::new(team_id, self.store.load_squad(team_id)?))
    }

    /// Validate and persist a batting order. Accepted orders overwrite the
    /// stored one wholesale; rejected candidates leave it untouched.
    pub fn submit_batting_order(
        &self,
        team_id: TeamId,
        batters: Vec<PlayerId>,
    ) -> Result<BattingOrder, SubmitError> {
        let squad = self.load_squad(team_id)?;
        let order = BattingOrder::new(batters);
        validate_batting_order(&order, &squad)?;
        self.store.save_batting_order(team_id, &order)?;
        info!(team_id, "batting order accepted");
        Ok(order)
    }

    /// Validate and persist a bowling rotation, same contract as
    /// [`TeamService::submit_batting_order`].
    pub fn submit_bowling_rotation(
        &self,
        team_id: TeamId,
        overs: Vec<Option<PlayerId>>,
    ) -> Result<BowlingRotation, SubmitError> {
        let squad = self.load_squad(team_id)?;
        let rotation = BowlingRotation::new(overs);
        validate_bowling_rotation(&rotation, &squad)?;
        self.store.save_bowling_rotation(team_id, &rotation)?;
        info!(team_id, "bowling rotation accepted");
        Ok(rotation)
    }

    /// Single-player creation with a live name-uniqueness check: a taken
    /// name gets the numeric suffix treatment instead of being rejected.
    pub fn create_player(&self, request: NewPlayer) -> Result<Player, RosterError> {
        if !request.position.belongs_to(self.variant) {
            return Err(RosterError::ForeignPosition {
                position: request.position,
                variant: self.variant,
            });
        }
        if let Some(attributes) = &request.attributes {
            if attributes.variant() != self.variant {
                return Err(RosterError::ForeignAttributes { variant: self.variant });
            }
        }

        let mut rng = StdRng::from_entropy();
        let model = self.variant.stat_model();

        let mut pool = NamePool::new(vec![request.name], self.config.name_retry_budget);
        let name = pool.next_unique(|candidate| {
            self.store
                .count_players_named(candidate)
                .map(|count| count > 0)
                .unwrap_or(false)
        });

        let mut attributes = match request.attributes {
            Some(attributes) => attributes,
            None => model.generate_attributes(request.position, &mut rng),
        };
        attributes.clamp_to_ranges();
        let overall_rating = attributes.overall_rating();

        let player = Player {
            id: PlayerId::generate(&mut rng),
            name,
            position: request.position,
            age: request.age.unwrap_or_else(|| draw_age(&mut rng)),
            morale: request.morale.unwrap_or_else(|| draw_morale(&mut rng)),
            attributes,
            overall_rating,
            team_id: request.team_id,
        };

        self.store
            .insert_players(request.team_id, std::slice::from_ref(&player))?;
        info!(team_id = request.team_id, "player created");
        Ok(player)
    }

    /// Composition and headline stats for the team-overview screen.
    pub fn squad_summary(&self, team_id: TeamId) -> Result<SquadSummary, StorageError> {
        Ok(self.load_squad(team_id)?.summary())
    }
}
