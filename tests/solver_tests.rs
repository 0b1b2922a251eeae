use safecracker::{
    hint, parse_safe, solution_path, solve_safe, Backtracker, Configuration, Hint, Safe,
    SafeConfig, SearchLimits,
};

fn safe(text: &str) -> Safe {
    parse_safe(text).expect("failed to parse safe")
}

fn lasers(safe: &Safe) -> Vec<(usize, usize)> {
    safe.laser_positions()
}

#[test]
fn lone_cell_takes_the_only_laser() {
    // With a laser on the single cell nothing is left unlit, unguarded or
    // unsatisfied, so the 1x1 safe solves immediately.
    let solved = solve_safe(&safe("1 1\n.\n")).expect("solvable");
    assert_eq!(lasers(&solved), vec![(0, 0)]);
    assert_eq!(solved.verify(), Ok(()));
}

#[test]
fn two_cell_row_solves_with_one_laser() {
    let solved = solve_safe(&safe("1 2\n. .\n")).expect("solvable");
    // Place is offered before skip, so the first cell gets the laser
    assert_eq!(lasers(&solved), vec![(0, 0)]);
    assert_eq!(
        solved.cell(0, 1).expect("cell in range").display_char(),
        '*'
    );
    assert_eq!(solved.verify(), Ok(()));
}

#[test]
fn four_pillar_requirement_forces_the_unique_solution() {
    // A center pillar demanding four lasers pins every neighbor; any further
    // laser would sit in a corner, in sight of one of them.
    let solved = solve_safe(&safe("3 3\n. . .\n. 4 .\n. . .\n")).expect("solvable");
    assert_eq!(lasers(&solved), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    assert_eq!(solved.verify(), Ok(()));
}

#[test]
fn inconsistent_start_degrades_to_no_solution() {
    // A lone pillar demanding a laser has no cell to supply one
    assert_eq!(solve_safe(&safe("1 1\n1\n")), None);
    // A corner pillar can never reach four adjacent lasers
    assert_eq!(solve_safe(&safe("2 2\n4 .\n. .\n")), None);
}

#[test]
fn zero_requirement_pillar_is_already_a_goal() {
    let start = safe("1 1\n0\n");
    let solved = solve_safe(&start).expect("already solved");
    assert_eq!(solved, start, "goal must be recognized without any decision");
}

#[test]
fn goal_and_verification_always_agree() {
    let start = SafeConfig::from_safe(safe("2 2\n. .\n. 2\n"));
    let mut frontier = vec![start];
    // Walk a few levels of the successor tree and compare the two predicates
    for _ in 0..4 {
        let mut next_level = Vec::new();
        for config in &frontier {
            assert_eq!(
                config.is_goal(),
                config.safe().verify().is_ok(),
                "goal and full verification disagreed"
            );
            next_level.extend(config.successors());
        }
        frontier = next_level;
    }
}

#[test]
fn successors_never_sit_on_a_pillar() {
    let start = SafeConfig::from_safe(safe("2 3\nX 1 .\n. X .\n"));
    let mut frontier = vec![start];
    for _ in 0..6 {
        let mut next_level = Vec::new();
        for config in &frontier {
            for child in config.successors() {
                if let Some((r, c)) = child.cursor_coord() {
                    let cell = child.safe().cell(r, c).expect("cursor in range");
                    assert!(!cell.is_pillar(), "cursor parked on a pillar at ({r}, {c})");
                }
                next_level.push(child);
            }
        }
        frontier = next_level;
    }
}

#[test]
fn place_decision_is_offered_before_skip() {
    let start = SafeConfig::from_safe(safe("1 2\n. .\n"));
    let children = start.successors();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].safe().laser_count(), 1);
    assert_eq!(children[1].safe().laser_count(), 0);
}

#[test]
fn exhausted_cursor_yields_single_terminal_child() {
    let mut s = safe("1 2\n. .\n");
    s.place_laser(0, 0).expect("place");
    let mut config = SafeConfig::from_safe(s);
    // Drive the cursor over both cells via the skip children
    for _ in 0..2 {
        config = config.successors().pop().expect("skip child");
    }
    let terminal = config.successors();
    assert_eq!(terminal.len(), 1);
    assert_eq!(terminal[0].cursor_coord(), None, "cursor parked past the end");
    assert!(terminal[0].is_valid(), "terminal child verifies the full grid");
}

#[test]
fn node_budget_fails_as_no_solution() {
    let limits = SearchLimits { max_nodes: Some(1) };
    let mut engine = Backtracker::with_limits(limits);
    let result = engine.solve(SafeConfig::from_safe(safe("1 2\n. .\n")));
    assert_eq!(result.map(SafeConfig::into_safe), None);
    assert_eq!(engine.stats().nodes, 1);
}

#[test]
fn solver_runs_are_deterministic() {
    let start = safe("3 3\n. . .\n. 4 .\n. . .\n");
    let first = solve_safe(&start).expect("solvable");
    let second = solve_safe(&start).expect("solvable");
    assert_eq!(first, second);
}

#[test]
fn stats_count_visited_configurations() {
    let mut engine = Backtracker::new();
    engine
        .solve(SafeConfig::from_safe(safe("1 2\n. .\n")))
        .expect("solvable");
    let stats = engine.stats();
    assert!(stats.nodes >= 2, "root and at least one child visited");
    assert!(stats.max_depth >= 1);
}

#[test]
fn solution_path_records_one_placement_per_entry() {
    let start = safe("3 3\n. . .\n. 4 .\n. . .\n");
    let path = solution_path(&start).expect("solvable");
    assert_eq!(path.len(), 4);
    let mut expected_count = start.laser_count();
    for config in &path {
        expected_count += 1;
        assert_eq!(
            config.safe().laser_count(),
            expected_count,
            "each entry must add exactly one laser"
        );
        let (r, c) = config.cursor_coord().expect("placement has a cursor cell");
        assert!(config.safe().cell(r, c).expect("cell in range").is_laser());
    }
}

#[test]
fn solved_safe_yields_empty_path_not_absence() {
    let solved = solve_safe(&safe("1 2\n. .\n")).expect("solvable");
    let path = solution_path(&solved).expect("a solved safe still has a path");
    assert!(path.is_empty());
}

#[test]
fn hint_suggests_first_placement() {
    assert_eq!(
        hint(&safe("1 2\n. .\n")),
        Hint::Place { row: 0, col: 0 }
    );
}

#[test]
fn hint_recognizes_solved_and_unsolvable_safes() {
    let solved = solve_safe(&safe("1 2\n. .\n")).expect("solvable");
    assert_eq!(hint(&solved), Hint::Solved);
    assert_eq!(hint(&safe("1 1\n1\n")), Hint::NoSolution);
}

#[test]
fn hint_applies_to_partially_cracked_safes() {
    let mut s = safe("3 3\n. . .\n. 4 .\n. . .\n");
    s.place_laser(0, 1).expect("place");
    match hint(&s) {
        Hint::Place { row, col } => {
            // The next placement must extend the current grid to a solution
            s.place_laser(row, col).expect("hinted cell is placeable");
            assert!(solve_safe(&s).is_some());
        }
        other => panic!("expected a placement hint, got {other:?}"),
    }
}

/// Minimal non-puzzle configuration: counts up by 1 or 2 towards a target.
/// Exercises the engine without any grid involved.
#[derive(Debug, Clone)]
struct CountUp {
    value: u32,
    target: u32,
}

impl Configuration for CountUp {
    fn successors(&self) -> Vec<Self> {
        [1, 2]
            .iter()
            .map(|step| CountUp {
                value: self.value + step,
                target: self.target,
            })
            .collect()
    }

    fn is_valid(&self) -> bool {
        self.value <= self.target
    }

    fn is_goal(&self) -> bool {
        self.value == self.target
    }
}

#[test]
fn engine_is_generic_over_configurations() {
    let mut engine = Backtracker::new();
    let goal = engine
        .solve(CountUp {
            value: 0,
            target: 3,
        })
        .expect("reachable");
    assert_eq!(goal.value, 3);

    let path = engine
        .solve_with_path(CountUp {
            value: 0,
            target: 3,
        })
        .expect("reachable");
    // Depth-first with +1 offered before +2: 1, 2, 3
    let values: Vec<u32> = path.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![1, 2, 3]);

    assert!(
        engine
            .solve_with_path(CountUp {
                value: 5,
                target: 3,
            })
            .is_none(),
        "overshoot cannot reach the target"
    );
}
