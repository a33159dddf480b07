/// A team with its score, as produced by `rank_teams`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: usize,
    pub score: i64,
}

/// A podium placement. Tied teams share a rank, and a shared rank skips
/// the following positions (two teams at rank 1 push the next distinct
/// score to rank 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PodiumEntry {
    pub team: usize,
    pub score: i64,
    pub rank: usize,
}

/// Apply final-round wagers to scores: add the wager on a correct answer,
/// subtract it otherwise. Pure and total; a missing wager counts as 0.
/// Calling this twice double-applies, so the final-round controller guards
/// it with an applied flag.
pub fn apply_final_wagers(scores: &[i64], wagers: &[i64], results: &[bool]) -> Vec<i64> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            let wager = wagers.get(i).copied().unwrap_or(0);
            if results.get(i).copied().unwrap_or(false) {
                score + wager
            } else {
                score - wager
            }
        })
        .collect()
}

/// Order teams by score descending. The sort is stable, but the order
/// between equal scores is not part of the contract; only the grouping
/// by score is.
pub fn rank_teams(scores: &[i64]) -> Vec<TeamStanding> {
    let mut ranked: Vec<TeamStanding> = scores
        .iter()
        .enumerate()
        .map(|(team, &score)| TeamStanding { team, score })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Derive the podium from a descending ranking. Ties share the preceding
/// team's rank. The result is all rank-1 teams, then rank-2 teams if there
/// is room, then the first rank-3 team, capped at 3 entries total: extra
/// teams tied within the cap are dropped, a limitation of the three-stand
/// podium display rather than a scoring rule.
pub fn compute_podium_with_ties(ranked: &[TeamStanding]) -> Vec<PodiumEntry> {
    if ranked.is_empty() {
        return Vec::new();
    }

    let mut with_ranks: Vec<PodiumEntry> = Vec::with_capacity(ranked.len());
    let mut current_rank = 1;
    for (i, entry) in ranked.iter().enumerate() {
        if i > 0 && entry.score < ranked[i - 1].score {
            current_rank = i + 1;
        }
        with_ranks.push(PodiumEntry {
            team: entry.team,
            score: entry.score,
            rank: current_rank,
        });
    }

    let mut podium: Vec<PodiumEntry> = with_ranks.iter().copied().filter(|e| e.rank == 1).collect();
    if podium.len() < 3 {
        podium.extend(with_ranks.iter().copied().filter(|e| e.rank == 2));
    }
    if podium.len() < 3 {
        if let Some(third) = with_ranks.iter().copied().find(|e| e.rank == 3) {
            podium.push(third);
        }
    }
    podium.truncate(3);
    podium
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_final_wagers() {
        let out = apply_final_wagers(
            &[100, 200, 300, 400],
            &[10, 20, 30, 40],
            &[true, false, true, false],
        );
        assert_eq!(out, vec![110, 180, 330, 360]);
    }

    #[test]
    fn test_apply_final_wagers_missing_wager_is_zero() {
        let out = apply_final_wagers(&[100, 200], &[10], &[false, true]);
        assert_eq!(out, vec![90, 200]);
    }

    #[test]
    fn test_rank_teams_groups_ties_at_top() {
        let ranked = rank_teams(&[0, 50, 10, 50]);
        // The two 50s occupy the top two positions in either order
        assert_eq!(ranked[0].score, 50);
        assert_eq!(ranked[1].score, 50);
        assert_eq!(ranked[2].score, 10);
        assert_eq!(ranked[3].score, 0);
    }

    #[test]
    fn test_podium_tie_for_first_skips_second() {
        let podium = compute_podium_with_ties(&rank_teams(&[400, 400, 250, 100]));
        assert_eq!(podium.len(), 3);
        assert_eq!(podium[0].rank, 1);
        assert_eq!(podium[1].rank, 1);
        assert_eq!(podium[2].rank, 3);
        assert_eq!(podium[2].score, 250);
        assert!(podium.iter().all(|e| e.score != 100));
    }

    #[test]
    fn test_podium_tie_for_second() {
        let podium = compute_podium_with_ties(&rank_teams(&[500, 300, 300, 200]));
        assert_eq!(podium[0].rank, 1);
        assert_eq!(podium[0].score, 500);
        assert_eq!(podium[1].rank, 2);
        assert_eq!(podium[2].rank, 2);
        assert!(podium.iter().all(|e| e.score != 200));
    }

    #[test]
    fn test_podium_four_way_tie_caps_at_three() {
        let podium = compute_podium_with_ties(&rank_teams(&[100, 100, 100, 100]));
        assert_eq!(podium.len(), 3);
        assert!(podium.iter().all(|e| e.rank == 1));
    }

    #[test]
    fn test_podium_empty_input() {
        assert!(compute_podium_with_ties(&[]).is_empty());
    }

    #[test]
    fn test_podium_all_distinct() {
        let podium = compute_podium_with_ties(&rank_teams(&[400, 300, 200, 100]));
        assert_eq!(podium.len(), 3);
        assert_eq!(
            podium.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            podium.iter().map(|e| e.score).collect::<Vec<_>>(),
            vec![400, 300, 200]
        );
    }

    #[test]
    fn test_negative_scores_rank_last() {
        let ranked = rank_teams(&[-200, 100, 0, -50]);
        assert_eq!(
            ranked.iter().map(|e| e.score).collect::<Vec<_>>(),
            vec![100, 0, -50, -200]
        );
    }
}
