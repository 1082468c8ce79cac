use hazard_pathfinding::prelude::*;
use nanorand::{Rng, WyRand};
use std::collections::VecDeque;
use std::time::Duration;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn finder() -> IdaStarFinder {
    IdaStarFinder::new(FinderConfig::default())
}

/// Length (in Points) of the shortest 4-directional Path, if any
fn bfs_len(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let index = |(x, y): Point| x + y * grid.width();
    let mut queue = VecDeque::new();
    dist[index(start)] = 1;
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(dist[index(current)]);
        }
        for next in grid.neighbors(current) {
            if dist[index(next.pos())] == usize::MAX {
                dist[index(next.pos())] = dist[index(current)] + 1;
                queue.push_back(next.pos());
            }
        }
    }
    None
}

fn assert_connected(grid: &Grid, path: &[Point]) {
    for step in path.windows(2) {
        let (a, b) = (step[0], step[1]);
        assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{:?} -> {:?}", a, b);
        assert!(grid.is_walkable_at(b.0, b.1));
    }
}

#[test]
fn start_equals_goal() {
    init();
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set_walkable_at(2, 3, false);
    for point in [(0, 0), (4, 4), (1, 3)] {
        assert_eq!(finder().find_path(point, point, &grid).unwrap(), vec![point]);
    }
}

#[test]
fn open_rectangle_is_shortest() {
    init();
    let grid = Grid::new(7, 5).unwrap();
    let points = [(0, 0), (6, 4), (3, 2), (6, 0), (0, 4), (1, 3)];
    for &start in &points {
        for &goal in &points {
            let path = finder().find_path(start, goal, &grid).unwrap();
            let expected = start.0.abs_diff(goal.0) + start.1.abs_diff(goal.1) + 1;
            assert_eq!(path.len(), expected, "{:?} -> {:?}", start, goal);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
            assert_connected(&grid, &path);
        }
    }
}

#[test]
fn out_of_bounds_never_searches() {
    init();
    let grid = Grid::new(4, 3).unwrap();
    for (start, goal) in [((4, 0), (0, 0)), ((0, 0), (0, 3)), ((9, 9), (9, 9))] {
        assert!(matches!(
            finder().find_path(start, goal, &grid),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}

#[test]
fn complete_wall() {
    init();
    let mut grid = Grid::new(6, 4).unwrap();
    for y in 0..4 {
        grid.set_walkable_at(3, y, false);
    }
    let report = finder().search((0, 1), (5, 2), &grid).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Unreachable);
    assert!(finder().find_path((0, 1), (5, 2), &grid).unwrap().is_empty());

    // one gap is enough
    grid.set_walkable_at(3, 3, true);
    let path = finder().find_path((0, 1), (5, 2), &grid).unwrap();
    assert_eq!(path.len(), bfs_len(&grid, (0, 1), (5, 2)).unwrap());
    assert!(path.contains(&(3, 3)));
}

#[test]
fn flooded_column_blocks_like_a_wall() {
    init();
    let mut grid = Grid::new(3, 3).unwrap();
    for y in 0..3 {
        grid.set_water_level_and_time(1, y, 3, 7);
    }
    assert!(finder().find_path((0, 0), (2, 2), &grid).unwrap().is_empty());

    grid.set_water_level_and_time(1, 1, 3, 6);
    assert_eq!(
        finder().find_path((0, 0), (2, 2), &grid).unwrap(),
        vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]
    );
}

#[test]
fn matches_bfs_on_random_grids() {
    init();
    let mut rng = WyRand::new_seed(7);
    let (width, height) = (5, 5);
    let mut checked = 0;
    for _ in 0..60 {
        let matrix: Vec<Vec<bool>> = (0..height)
            .map(|_| (0..width).map(|_| rng.generate_range(0..100u32) >= 25).collect())
            .collect();
        let mut grid = Grid::with_matrix(width, height, &matrix).unwrap();
        let start = (0, 0);
        let goal = (width - 1, height - 1);
        grid.set_walkable_at(start.0, start.1, true);
        grid.set_walkable_at(goal.0, goal.1, true);

        let Some(expected) = bfs_len(&grid, start, goal) else {
            continue;
        };
        let path = finder().find_path(start, goal, &grid).unwrap();
        assert_eq!(path.len(), expected, "{:?}", matrix);
        assert_connected(&grid, &path);
        checked += 1;
    }
    assert!(checked > 5);
}

#[test]
fn time_limit_ends_hopeless_search() {
    init();
    let mut grid = Grid::new(12, 12).unwrap();
    grid.set_walkable_at(10, 11, false);
    grid.set_walkable_at(11, 10, false);

    let config = FinderConfig {
        time_limit: Some(Duration::from_millis(1)),
        ..Default::default()
    };
    let finder = IdaStarFinder::new(config);

    let report = finder.search((0, 0), (11, 11), &grid).unwrap();
    assert_eq!(report.outcome, SearchOutcome::TimedOut);
    assert!(report.stats.elapsed < Duration::from_secs(5));

    assert!(finder.find_path((0, 0), (11, 11), &grid).unwrap().is_empty());

    // a reachable goal on the same grid is found well within a generous limit
    let relaxed = IdaStarFinder::new(FinderConfig::default().with_time_limit_secs(10.0));
    assert_eq!(relaxed.find_path((0, 0), (3, 0), &grid).unwrap().len(), 4);
}

#[test]
fn weight_zero_behaves_like_one() {
    init();
    let grid = Grid::new(6, 6).unwrap();
    let zero = IdaStarFinder::new(FinderConfig {
        weight: 0.0,
        ..Default::default()
    });
    for goal in [(5, 5), (0, 5), (3, 1)] {
        assert_eq!(
            zero.find_path((0, 0), goal, &grid).unwrap(),
            finder().find_path((0, 0), goal, &grid).unwrap()
        );
    }
}

#[test]
fn heavier_weight_still_reaches_goal() {
    init();
    let matrix = [
        [true, true, true, true, true],
        [true, false, false, false, true],
        [true, true, true, false, true],
        [false, false, true, false, true],
        [true, true, true, true, true],
    ];
    let grid = Grid::with_matrix(5, 5, &matrix).unwrap();
    let heavy = IdaStarFinder::new(FinderConfig {
        weight: 3.0,
        ..Default::default()
    });
    let path = heavy.find_path((0, 2), (4, 4), &grid).unwrap();
    assert_eq!(path.first(), Some(&(0, 2)));
    assert_eq!(path.last(), Some(&(4, 4)));
    assert_connected(&grid, &path);
}

#[test]
fn unknown_heuristic_falls_back() {
    init();
    let grid = Grid::new(4, 4).unwrap();
    let fallback = IdaStarFinder::from_heuristic_name("euclid", FinderConfig::default());
    let report = fallback.search((0, 0), (3, 3), &grid).unwrap();
    assert_eq!(report.heuristic_fallback.as_ref().unwrap().name, "euclid");
    assert_eq!(
        report.outcome.into_points(),
        finder().find_path((0, 0), (3, 3), &grid).unwrap()
    );

    let known = IdaStarFinder::from_heuristic_name("enhanced", FinderConfig::default());
    assert!(known.search((0, 0), (3, 3), &grid).unwrap().heuristic_fallback.is_none());
}

#[derive(Default)]
struct Recorder {
    iterations: Vec<f64>,
    visits: usize,
    prunes: usize,
    goals: Vec<(Point, usize)>,
}

impl SearchObserver for Recorder {
    fn on_iteration(&mut self, _iteration: usize, cutoff: f64) {
        self.iterations.push(cutoff);
    }
    fn on_visit(&mut self, _point: Point, _g: f64, _f: f64, _depth: usize) {
        self.visits += 1;
    }
    fn on_prune(&mut self, _point: Point, _f: f64) {
        self.prunes += 1;
    }
    fn on_goal(&mut self, point: Point, depth: usize) {
        self.goals.push((point, depth));
    }
}

#[test]
fn observer_sees_every_iteration() {
    init();
    // . # .
    // . # .
    // . . .
    let matrix = [[true, false, true], [true, false, true], [true, true, true]];
    let grid = Grid::with_matrix(3, 3, &matrix).unwrap();
    let mut recorder = Recorder::default();
    let report = finder()
        .search_observed((0, 0), (2, 0), &grid, &mut recorder)
        .unwrap();

    assert_eq!(recorder.iterations, vec![2.0, 4.0, 6.0]);
    assert_eq!(recorder.goals, vec![((2, 0), 6)]);
    assert_eq!(recorder.visits + recorder.prunes, report.stats.nodes_visited);
}

#[test]
fn batch_search_on_shared_grid() {
    init();
    let mut grid = Grid::new(6, 6).unwrap();
    for y in 0..5 {
        grid.set_walkable_at(2, y, false);
    }
    let queries = [((0, 0), (5, 0)), ((0, 0), (0, 5)), ((1, 1), (9, 9)), ((4, 4), (4, 4))];
    let results = finder().find_paths(&queries, &grid);

    assert_eq!(results.len(), queries.len());
    for (&(start, goal), result) in queries.iter().zip(&results) {
        match result {
            Ok(path) => {
                assert_eq!(path.len(), bfs_len(&grid, start, goal).unwrap());
                assert_eq!(*path, finder().find_path(start, goal, &grid).unwrap());
            }
            Err(err) => assert!(matches!(err, GridError::OutOfBounds { x: 9, y: 9, .. })),
        }
    }
    assert!(results[2].is_err());
}

#[test]
fn clone_independence_everywhere() {
    init();
    let mut original = Grid::new(4, 3).unwrap();
    let copy = original.clone();
    for y in 0..3 {
        for x in 0..4 {
            original.set_water_level_and_time(x, y, 4, 7);
        }
    }
    assert!(copy.nodes().all(|node| node.walkable && node.water_level() == 0));

    let mut copy = original.clone();
    for y in 0..3 {
        for x in 0..4 {
            copy.set_walkable_at(x, y, true);
        }
    }
    assert!(original.nodes().all(|node| !node.walkable));
}
