use super::*;

const RISK: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

fn digits(input: &str) -> Map2d<u32> {
    Map2d::builder().parse_digits(input).unwrap().build()
}

fn c(x: i64, y: i64) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn test_parse_lays_out_columns_and_lines() {
    let map = digits("123\n456");
    assert_eq!(map.len(), 6);
    assert_eq!(map.get(c(2, 0)), Some(&3));
    assert_eq!(map.get(c(0, 1)), Some(&4));
    assert_eq!((map.min_x(), map.min_y(), map.max_x(), map.max_y()), (Some(0), Some(0), Some(2), Some(1)));
}

#[test]
fn test_parse_rejects_invalid_cell() {
    let result = Map2d::builder().parse_digits("12\n3x");
    assert_eq!(
        result.err(),
        Some(GraphError::InvalidCell {
            coordinate: c(1, 1),
            found: 'x'
        })
    );
}

#[test]
fn test_orthogonal_and_diagonal_links() {
    let grid = "000\n000\n000";
    assert_eq!(digits(grid).graph().links().len(), 12);

    let diagonal = Map2d::builder().with_diagonals(true).parse_digits(grid).unwrap().build();
    assert_eq!(diagonal.graph().links().len(), 20);
    assert_eq!(diagonal.neighbours(c(1, 1)).count(), 8);
    assert_eq!(diagonal.neighbours(c(0, 0)).count(), 3);
}

#[test]
fn test_sparse_map_has_no_links_and_no_path() {
    let map = Map2d::of_nodes(
        [c(0, 0), c(5, 5), c(10, 0)].map(|coordinate| Node::new(coordinate, ())),
        false,
        1,
    );
    assert!(map.graph().links().is_empty());
    assert!(map.shortest_path(c(0, 0), c(10, 0)).unwrap().is_none());
    assert!(map.contains(c(5, 5)));
    assert!(!map.contains(c(1, 0)));
}

#[test]
fn test_disconnected_components_terminate() {
    let map = digits("11011\n11011\n11011").filter(|node| *node.data() != 0);
    assert_eq!(map.len(), 12);
    assert!(map.shortest_path(c(0, 0), c(4, 2)).unwrap().is_none());
    assert!(map.shortest_path(c(0, 0), c(1, 2)).unwrap().is_some());
}

#[test]
fn test_unknown_coordinate() {
    let map = digits("12\n34");
    assert_eq!(map.value(c(7, 7)), Err(GraphError::UnknownCoordinate(c(7, 7))));
    assert_eq!(
        map.shortest_path(c(0, 0), c(2, 0)).unwrap_err(),
        GraphError::UnknownCoordinate(c(2, 0))
    );
    assert!(map.area(c(-1, 0), false, |_, _| true).is_err());
}

#[test]
fn test_risk_grid_shortest_path() {
    let map = Map2d::builder().link_weight(0).parse_weights(RISK).unwrap().build();
    let path = map.shortest_path(c(0, 0), c(9, 9)).unwrap().unwrap();
    assert_eq!(path.weight() - path.start().weight(), 40);
    assert_eq!(path.start().id(), &c(0, 0));
    assert_eq!(path.end().id(), &c(9, 9));
}

#[test]
fn test_default_heuristic_matches_dijkstra() {
    for with_diagonals in [false, true] {
        for link_weight in [0, 1, 3] {
            let map = Map2d::builder()
                .with_diagonals(with_diagonals)
                .link_weight(link_weight)
                .parse_weights(RISK)
                .unwrap()
                .build();
            let guided = map.shortest_path(c(0, 0), c(9, 9)).unwrap().unwrap();
            let plain = map.shortest_path_with(c(0, 0), c(9, 9), |_| 0).unwrap().unwrap();
            assert_eq!(guided.weight(), plain.weight(), "diagonals={with_diagonals} link={link_weight}");
        }
    }
}

#[test]
fn test_map_values_round_trip() {
    let input = "12345\n67890\n13579\n24680\n11111";
    let map = digits(input);
    let incremented = map.map_values(|v| v + 1);

    assert_eq!(incremented.len(), map.len());
    for node in map.nodes() {
        assert_eq!(incremented.value(*node.id()), Ok(&(node.data() + 1)));
    }
    assert_eq!(incremented.graph().links().len(), map.graph().links().len());
}

#[test]
fn test_edit_rebuilds_links() {
    let map = digits("111\n111\n111");
    let holed = map.edit(|grid| {
        grid.remove(c(1, 1));
        grid.set_value(c(0, 0), 9);
        assert_eq!(grid.set_value(c(1, 1), 5), None);
    });

    assert_eq!(holed.len(), 8);
    assert_eq!(holed.graph().links().len(), 8);
    assert_eq!(holed.get(c(0, 0)), Some(&9));
    assert_eq!(map.get(c(0, 0)), Some(&1));
    assert_eq!(map.len(), 9);
}

#[test]
fn test_map_merges_colliding_nodes() {
    let map = digits("12\n34");
    let rows = map.map(
        |node| Node::new(c(0, node.id().y), *node.data()),
        |a, b| a + b,
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.get(c(0, 0)), Some(&3));
    assert_eq!(rows.get(c(0, 1)), Some(&7));
    assert_eq!(rows.graph().links().len(), 1);
}

#[test]
fn test_area_follows_filter() {
    let map = digits("2199943210\n3987894921\n9856789892\n8767896789\n9899965678");
    let basin = map
        .area(c(1, 0), false, |from, to| to.data() > from.data() && *to.data() != 9)
        .unwrap();
    assert_eq!(basin.len(), 3);
    assert!(basin.contains(&c(0, 0)));
    assert!(basin.contains(&c(0, 1)));
}

#[test]
fn test_empty_map_has_no_bounds() {
    let map: Map2d<u32> = Map2d::builder().build();
    assert!(map.is_empty());
    assert_eq!(map.min_x(), None);
    assert_eq!(map.max_y(), None);
}
