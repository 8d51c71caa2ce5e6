// src/leaderboard.rs
//
// Ranking math for the two team boards. Pure functions up top so the tests
// can drive them natively; the Yew component at the bottom only walks the
// precomputed rows.

use indexmap::IndexMap;
use yew::prelude::*;

/// One team's scores, in document order. Order matters: equal scores keep
/// their relative position from the fetched JSON.
pub type ScoreBoard = IndexMap<String, f64>;

/// Team identity. The lowercase wire value is what the game reads from its
/// query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamColor {
    Pink,
    Blue,
}

impl TeamColor {
    pub fn label(self) -> &'static str {
        match self {
            TeamColor::Pink => "Pink Team",
            TeamColor::Blue => "Blue Team",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TeamColor::Pink => "pink",
            TeamColor::Blue => "blue",
        }
    }

    /// Unknown strings fall back to Blue, same as the game's auth parsing.
    pub fn parse(s: &str) -> TeamColor {
        match s.to_lowercase().as_str() {
            "pink" => TeamColor::Pink,
            _ => TeamColor::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub player: String,
    pub score: f64,
    /// Score over the global max, clamped to [0, 1]. Drives the bar width.
    pub bar_fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub team: TeamColor,
    pub rows: Vec<RankedRow>,
    pub total: f64,
}

/// Largest score on a board, 0.0 for an empty board.
fn max_score(board: &ScoreBoard) -> f64 {
    board.values().fold(0.0_f64, |acc, &s| acc.max(s))
}

fn board_total(board: &ScoreBoard) -> f64 {
    board.values().sum()
}

fn summarize(team: TeamColor, board: &ScoreBoard, global_max: f64) -> TeamSummary {
    let mut rows: Vec<RankedRow> = board
        .iter()
        .map(|(player, &score)| RankedRow {
            player: player.clone(),
            score,
            bar_fraction: if global_max > 0.0 {
                (score / global_max).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect();
    // sort_by is stable, so equal scores keep document order.
    rows.sort_by(|a, b| b.score.total_cmp(&a.score));
    TeamSummary {
        team,
        rows,
        total: board_total(board),
    }
}

/// Rank both boards against the shared global max, pink first.
pub fn rank_teams(pink: &ScoreBoard, blue: &ScoreBoard) -> (TeamSummary, TeamSummary) {
    let global_max = max_score(pink).max(max_score(blue));
    (
        summarize(TeamColor::Pink, pink, global_max),
        summarize(TeamColor::Blue, blue, global_max),
    )
}

/// Scores come out of JSON as f64; whole numbers print without the ".0".
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

#[derive(Properties, PartialEq)]
pub struct LeaderboardProps {
    pub pink: ScoreBoard,
    pub blue: ScoreBoard,
}

fn team_column(summary: &TeamSummary) -> Html {
    html! {
        <div class={classes!("team", summary.team.as_str())}>
            <h2>{ format!("{}({})", summary.team.label(), format_score(summary.total)) }</h2>
            { for summary.rows.iter().map(|row| html! {
                <div class="row" key={row.player.clone()}>
                    <div class="player">{ row.player.clone() }</div>
                    <div class="score">{ format_score(row.score) }</div>
                    <div class="barTrack">
                        <div class="bar" style={format!("width:{}%;", row.bar_fraction * 100.0)}></div>
                    </div>
                </div>
            }) }
            if summary.rows.is_empty() {
                <div class="small">{ "No players yet." }</div>
            }
        </div>
    }
}

#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    let (pink, blue) = rank_teams(&props.pink, &props.blue);
    html! {
        <div class="leaderboard">
            { team_column(&pink) }
            { team_column(&blue) }
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use indexmap::indexmap;

    #[test]
    fn both_boards_empty() {
        let (pink, blue) = rank_teams(&ScoreBoard::new(), &ScoreBoard::new());
        assert!(pink.rows.is_empty());
        assert!(blue.rows.is_empty());
        assert_eq!(pink.total, 0.0);
        assert_eq!(blue.total, 0.0);
    }

    #[test]
    fn ranks_and_scales_against_the_shared_max() {
        let pink = indexmap! {
            "a".to_string() => 30.0,
            "b".to_string() => 10.0,
        };
        let blue = indexmap! {
            "c".to_string() => 20.0,
        };
        let (p, b) = rank_teams(&pink, &blue);

        let p_order: Vec<(&str, f64)> =
            p.rows.iter().map(|r| (r.player.as_str(), r.score)).collect();
        assert_eq!(p_order, vec![("a", 30.0), ("b", 10.0)]);
        assert_eq!(p.total, 40.0);

        let b_order: Vec<(&str, f64)> =
            b.rows.iter().map(|r| (r.player.as_str(), r.score)).collect();
        assert_eq!(b_order, vec![("c", 20.0)]);
        assert_eq!(b.total, 20.0);

        assert_eq!(p.rows[0].bar_fraction, 1.0);
        assert!((p.rows[1].bar_fraction - 1.0 / 3.0).abs() < 1e-12);
        assert!((b.rows[0].bar_fraction - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sorts_descending_regardless_of_document_order() {
        let blue = indexmap! {
            "low".to_string() => 4.0,
            "high".to_string() => 90.0,
            "mid".to_string() => 25.0,
        };
        let (_, b) = rank_teams(&ScoreBoard::new(), &blue);
        let order: Vec<&str> = b.rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn equal_scores_keep_document_order() {
        let pink = indexmap! {
            "x".to_string() => 5.0,
            "y".to_string() => 5.0,
        };
        let (p, _) = rank_teams(&pink, &ScoreBoard::new());
        let order: Vec<&str> = p.rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(order, vec!["x", "y"]);
    }

    #[test]
    fn all_zero_scores_scale_to_zero() {
        let pink = indexmap! {
            "a".to_string() => 0.0,
            "b".to_string() => 0.0,
        };
        let (p, b) = rank_teams(&pink, &ScoreBoard::new());
        assert!(p.rows.iter().all(|r| r.bar_fraction == 0.0));
        assert!(b.rows.is_empty());
        assert_eq!(p.total, 0.0);
    }

    #[test]
    fn single_player_at_the_global_max_fills_the_bar() {
        let blue = indexmap! { "solo".to_string() => 7.5 };
        let (_, b) = rank_teams(&ScoreBoard::new(), &blue);
        assert_eq!(b.rows[0].bar_fraction, 1.0);
    }

    #[test]
    fn someone_fills_the_bar_whenever_scores_exist() {
        let pink = indexmap! {
            "a".to_string() => 12.0,
            "b".to_string() => 40.0,
        };
        let blue = indexmap! {
            "c".to_string() => 39.5,
        };
        let (p, b) = rank_teams(&pink, &blue);
        let full = p
            .rows
            .iter()
            .chain(b.rows.iter())
            .filter(|r| r.bar_fraction == 1.0)
            .count();
        assert_eq!(full, 1);
        assert!(p
            .rows
            .iter()
            .chain(b.rows.iter())
            .all(|r| (0.0..=1.0).contains(&r.bar_fraction)));
    }

    #[test]
    fn totals_match_the_sum() {
        let pink = indexmap! {
            "a".to_string() => 1.5,
            "b".to_string() => 2.5,
            "c".to_string() => 6.0,
        };
        let (p, _) = rank_teams(&pink, &ScoreBoard::new());
        assert_eq!(p.total, 10.0);
    }

    #[test]
    fn whole_and_fractional_score_formatting() {
        assert_eq!(format_score(30.0), "30");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(10.5), "10.5");
        assert_eq!(format_score(287.0), "287");
    }

    #[test]
    fn unknown_color_falls_back_to_blue() {
        assert_eq!(TeamColor::parse("pink"), TeamColor::Pink);
        assert_eq!(TeamColor::parse("PINK"), TeamColor::Pink);
        assert_eq!(TeamColor::parse("blue"), TeamColor::Blue);
        assert_eq!(TeamColor::parse("chartreuse"), TeamColor::Blue);
        assert_eq!(TeamColor::parse(""), TeamColor::Blue);
    }
}
