fn main() -> munkres::Result<()> {
    #[rustfmt::skip]
    let costs = nalgebra::DMatrix::from_row_slice(4, 2, &[
        2., 1.,
        2., 1.,
        1., 1.,
        1., 1.,
    ]);
    let solver = munkres::solve(&costs)?;

    for (row, col) in solver.assignments() {
        println!("row {row} -> col {col} ({})", costs[(row, col)]);
    }
    println!("links: {:?}", solver.links());
    println!("total: {}", solver.cost());
    Ok(())
}
