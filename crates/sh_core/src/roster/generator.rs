//! Squad generation.
//!
//! Called exactly once per team, inside the team-creation transaction:
//! the whole squad is built in memory and persisted with a single bulk
//! insert. A storage failure aborts the generation (the caller rolls the
//! team back); name-source trouble is recovered internally and never
//! aborts anything.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::models::player::{Player, PlayerId, TeamId};
use crate::names::{NameDirectory, NamePool};
use crate::storage::SquadStore;

use super::stat_model::{draw_age, draw_morale, SportVariant};

pub struct SquadGenerator<'a> {
    store: &'a dyn SquadStore,
    names: NameDirectory<'a>,
    variant: SportVariant,
    config: GeneratorConfig,
}

impl<'a> SquadGenerator<'a> {
    pub fn new(store: &'a dyn SquadStore, names: NameDirectory<'a>, variant: SportVariant) -> Self {
        SquadGenerator::with_config(store, names, variant, GeneratorConfig::default())
    }

    pub fn with_config(
        store: &'a dyn SquadStore,
        names: NameDirectory<'a>,
        variant: SportVariant,
        config: GeneratorConfig,
    ) -> Self {
        SquadGenerator { store, names, variant, config }
    }

    /// Generate and persist a full squad with a fresh entropy seed.
    pub fn generate_squad(&self, team_id: TeamId) -> Result<Vec<Player>, GenerationError> {
        self.generate_squad_with(team_id, &mut StdRng::from_entropy())
    }

    /// Reproducible generation: same seed, same squad (ids included).
    pub fn generate_squad_seeded(
        &self,
        team_id: TeamId,
        seed: u64,
    ) -> Result<Vec<Player>, GenerationError> {
        self.generate_squad_with(team_id, &mut StdRng::seed_from_u64(seed))
    }

    pub fn generate_squad_with<R: Rng>(
        &self,
        team_id: TeamId,
        rng: &mut R,
    ) -> Result<Vec<Player>, GenerationError> {
        let model = self.variant.stat_model();
        let squad_size = model.squad_size();

        let mut candidates = self
            .names
            .candidates(squad_size * self.config.candidates_per_slot.max(1));
        candidates.shuffle(rng);
        let mut pool = NamePool::new(candidates, self.config.name_retry_budget);

        let mut players = Vec::with_capacity(squad_size);
        for &(position, count) in model.position_roster() {
            for _ in 0..count {
                let name = pool.next_unique(|candidate| self.name_already_persisted(candidate));
                let attributes = model.generate_attributes(position, rng);
                let overall_rating = attributes.overall_rating();
                players.push(Player {
                    id: PlayerId::generate(rng),
                    name,
                    position,
                    age: draw_age(rng),
                    morale: draw_morale(rng),
                    attributes,
                    overall_rating,
                    team_id,
                });
            }
        }

        debug!(team_id, squad_size, variant = %self.variant, "generated squad, persisting");
        self.store.insert_players(team_id, &players)?;
        info!(team_id, players = players.len(), "squad persisted");
        Ok(players)
    }

    /// Live-row uniqueness probe. A failing probe is not authoritative:
    /// only the bulk insert may abort generation, so the name is assumed
    /// unused and the miss is logged.
    fn name_already_persisted(&self, name: &str) -> bool {
        match self.store.count_players_named(name) {
            Ok(count) => count > 0,
            Err(err) => {
                warn!("name uniqueness probe failed, assuming '{name}' unused: {err}");
                false
            }
        }
    }
}
