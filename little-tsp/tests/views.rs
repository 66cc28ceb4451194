use little_tsp::*;

fn sample_graph() -> Graph {
    Graph::new(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
    .unwrap()
}

#[test]
fn test_row_view_follows_available_columns() {
    let graph = sample_graph();
    let cost_matrix = CostMatrix::new(&graph, &[Edge::new(0, 1)], &[]).unwrap();
    let row = cost_matrix.row(2).unwrap();

    assert_eq!(row.len(), 3);
    assert_eq!(row.condensed_index(), 1);
    assert_eq!(row[0].edge(), Edge::new(2, 0));
    assert_eq!(row[1].edge(), Edge::new(2, 2));
    assert_eq!(row[2].edge(), Edge::new(2, 3));
    assert_eq!(row[2].value(), Some(30));
    assert!(row.get(3).is_none());
}

#[test]
fn test_column_view_follows_available_rows() {
    let graph = sample_graph();
    let cost_matrix = CostMatrix::new(&graph, &[Edge::new(0, 1)], &[]).unwrap();
    let column = cost_matrix.column(3).unwrap();

    assert_eq!(column.len(), 3);
    assert_eq!(column.condensed_index(), 2);
    let edges: Vec<Edge> = column.iter().map(|cell| cell.edge()).collect();
    assert_eq!(
        edges,
        vec![Edge::new(1, 3), Edge::new(2, 3), Edge::new(3, 3)]
    );
    assert_eq!(column.min_cost(), Some(CellCost::Finite(25)));
}

#[test]
#[should_panic]
fn test_row_view_index_out_of_bounds() {
    let cost_matrix = CostMatrix::from_graph(&sample_graph());
    let row = cost_matrix.row(0).unwrap();
    let _ = row[4].value();
}

#[test]
fn test_vector_iterator_advances_len_times() {
    let graph = sample_graph();
    let cost_matrix = CostMatrix::new(&graph, &[Edge::new(0, 1), Edge::new(2, 1)], &[]).unwrap();

    let row = cost_matrix.row(3).unwrap();
    let mut iter = row.iter();
    assert_eq!(iter.len(), 3);
    let mut steps = 0;
    while iter.next().is_some() {
        steps += 1;
        assert_eq!(iter.position(), steps);
    }
    assert_eq!(steps, 3);
    assert!(iter.is_end());
    assert!(iter.next().is_none());

    let column = cost_matrix.column(0).unwrap();
    assert_eq!(column.iter().count(), 2);
    assert_eq!(column.iter().len(), column.len());
}

#[test]
fn test_vector_iterator_equality() {
    let cost_matrix = CostMatrix::from_graph(&sample_graph());
    let row = cost_matrix.row(1).unwrap();

    let mut a = row.iter();
    let mut b = row.iter();
    assert!(a == b);
    a.next();
    assert!(a != b);
    b.next();
    assert!(a == b);

    let other_row = cost_matrix.row(2).unwrap();
    assert!(row.iter() != other_row.iter());
}

#[test]
fn test_mutable_views() {
    let mut cost_matrix = CostMatrix::from_graph(&sample_graph());

    let mut row = cost_matrix.row_mut(1).unwrap();
    row.subtract(10);
    row[3] -= 5;
    assert_eq!(row.iter_mut().len(), 4);
    assert_eq!(
        cost_matrix.to_rows()[1],
        vec![Some(0), None, Some(25), Some(10)]
    );

    let mut column = cost_matrix.column_mut(2).unwrap();
    column.get_mut(0).unwrap().set_infinite();
    for cell in column.iter_mut() {
        *cell -= 0;
    }
    assert!(cost_matrix.get((0, 2)).unwrap().is_infinite());
    assert!(cost_matrix.get((2, 2)).unwrap().is_infinite());
    assert_eq!(cost_matrix.get((3, 2)).unwrap().value(), Some(30));
}

#[test]
fn test_column_iter_mut_touches_only_its_column() {
    let mut cost_matrix = CostMatrix::from_graph(&sample_graph());
    let mut column = cost_matrix.column_mut(0).unwrap();
    let visited: Vec<Edge> = column.iter_mut().map(|cell| cell.edge()).collect();

    assert_eq!(
        visited,
        vec![
            Edge::new(0, 0),
            Edge::new(1, 0),
            Edge::new(2, 0),
            Edge::new(3, 0)
        ]
    );
}

#[test]
fn test_matrix_iterator_is_row_major() {
    let graph = sample_graph();
    let cost_matrix = CostMatrix::new(&graph, &[Edge::new(0, 1)], &[]).unwrap();

    let visited: Vec<Edge> = cost_matrix.iter().map(|cell| cell.edge()).collect();
    let mut expected = Vec::new();
    for &row in cost_matrix.row_vertices() {
        for &column in cost_matrix.column_vertices() {
            expected.push(Edge::new(row, column));
        }
    }
    assert_eq!(visited.len(), 9);
    assert_eq!(visited, expected);
    assert_eq!((&cost_matrix).into_iter().count(), 9);
}

#[test]
fn test_matrix_iterator_end_state() {
    let cost_matrix = CostMatrix::from_graph(&sample_graph());
    let mut iter = cost_matrix.iter();

    assert_eq!(iter.position(), (0, 0));
    assert_eq!(iter.len(), 16);
    for _ in 0..3 {
        iter.next();
    }
    assert_eq!(iter.position(), (0, 3));
    iter.next();
    assert_eq!(iter.position(), (1, 0));
    assert_eq!(iter.len(), 12);

    assert!(iter != cost_matrix.iter_end());
    assert_eq!(iter.by_ref().count(), 12);
    assert!(iter.is_end());
    assert_eq!(iter.position(), (4, 0));
    assert!(iter == cost_matrix.iter_end());
    assert!(iter.next().is_none());
    assert!(iter == cost_matrix.iter_end());
}

#[test]
fn test_matrix_iterators_of_different_matrices_differ() {
    let graph = sample_graph();
    let a = CostMatrix::from_graph(&graph);
    let b = CostMatrix::from_graph(&graph);

    assert!(a.iter() == a.iter());
    assert!(a.iter() != b.iter());
}

#[test]
fn test_empty_matrix_iterates_zero_times() {
    let graph = Graph::new(vec![vec![0, 3], vec![4, 0]]).unwrap();
    let cost_matrix = CostMatrix::new(&graph, &[Edge::new(0, 1), Edge::new(1, 0)], &[]).unwrap();

    let mut iter = cost_matrix.iter();
    assert!(iter.is_end());
    assert!(iter == cost_matrix.iter_end());
    assert!(iter.next().is_none());
}

#[test]
fn test_iter_mut_visits_every_cell() {
    let mut cost_matrix = CostMatrix::from_graph(&sample_graph());
    for cell in cost_matrix.iter_mut() {
        *cell -= 10;
    }

    assert_eq!(
        cost_matrix.to_rows()[2],
        vec![Some(5), Some(25), None, Some(20)]
    );
    assert_eq!(cost_matrix.iter().filter(|cell| cell.is_infinite()).count(), 4);
}
