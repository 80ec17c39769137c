//! Squad: the fixed-size set of players belonging to one team.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Position, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub team_id: TeamId,
    pub players: Vec<Player>,
}

impl Squad {
    pub fn new(team_id: TeamId, players: Vec<Player>) -> Self {
        Squad { team_id, players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn count_at(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    pub fn average_age(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.players.iter().map(|p| u32::from(p.age)).sum();
        sum as f32 / self.players.len() as f32
    }

    pub fn average_rating(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.players.iter().map(|p| u32::from(p.overall_rating)).sum();
        sum as f32 / self.players.len() as f32
    }

    /// Composition and headline stats for the team-overview screen.
    /// Averages are rounded to one decimal, top players sorted by rating.
    pub fn summary(&self) -> SquadSummary {
        let mut composition: Vec<PositionGroup> = Vec::new();
        for player in &self.players {
            match composition.iter_mut().find(|g| g.position == player.position) {
                Some(group) => group.players.push(player.clone()),
                None => composition.push(PositionGroup {
                    position: player.position,
                    players: vec![player.clone()],
                }),
            }
        }

        let mut ranked: Vec<Player> = self.players.clone();
        ranked.sort_by(|a, b| {
            b.overall_rating
                .cmp(&a.overall_rating)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(3);

        SquadSummary {
            total_players: self.players.len(),
            average_age: round1(self.average_age()),
            average_rating: round1(self.average_rating()),
            composition,
            top_players: ranked,
        }
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Players grouped under one position label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionGroup {
    pub position: Position,
    pub players: Vec<Player>,
}

/// Headline data served by the team-composition endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadSummary {
    pub total_players: usize,
    pub average_age: f32,
    pub average_rating: f32,
    pub composition: Vec<PositionGroup>,
    pub top_players: Vec<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{PerformanceStats, PlayerAttributes};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(rng: &mut StdRng, name: &str, position: Position, rating_seed: f32) -> Player {
        let stats = PerformanceStats::non_bowler(rating_seed, 120.0, 60);
        Player {
            id: PlayerId::generate(rng),
            name: name.to_string(),
            position,
            age: 26,
            morale: 60,
            overall_rating: stats.overall_rating(),
            attributes: PlayerAttributes::Performance(stats),
            team_id: 1,
        }
    }

    #[test]
    fn summary_groups_by_position_and_ranks_top_players() {
        let mut rng = StdRng::seed_from_u64(9);
        let squad = Squad::new(
            1,
            vec![
                player(&mut rng, "Keeper", Position::WicketKeeper, 20.0),
                player(&mut rng, "Opener One", Position::OpeningBatsman, 45.0),
                player(&mut rng, "Opener Two", Position::OpeningBatsman, 35.0),
                player(&mut rng, "Finisher", Position::Finisher, 25.0),
            ],
        );

        let summary = squad.summary();
        assert_eq!(summary.total_players, 4);
        assert_eq!(summary.composition.len(), 3, "three distinct positions");
        let openers = summary
            .composition
            .iter()
            .find(|g| g.position == Position::OpeningBatsman)
            .expect("openers group");
        assert_eq!(openers.players.len(), 2);

        assert_eq!(summary.top_players.len(), 3);
        assert_eq!(summary.top_players[0].name, "Opener One");
        assert!(
            summary.top_players[0].overall_rating >= summary.top_players[1].overall_rating,
            "top players must be sorted by rating"
        );
    }

    #[test]
    fn contains_and_get_find_members_only() {
        let mut rng = StdRng::seed_from_u64(10);
        let members = vec![player(&mut rng, "Member", Position::Batsman, 30.0)];
        let outsider = PlayerId::generate(&mut rng);
        let squad = Squad::new(1, members);

        let member_id = squad.players[0].id;
        assert!(squad.contains(member_id));
        assert!(squad.get(member_id).is_some());
        assert!(!squad.contains(outsider));
        assert!(squad.get(outsider).is_none());
    }
}
