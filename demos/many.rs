use munkres::Munkres;

const ASSIGNMENT_SIZE: usize = 64;
const N: usize = 100;

fn main() -> munkres::Result<()> {
    let mut solver = Munkres::<f64>::new(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE)?;
    let mut total_cost = 0.;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<f64>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE);
        solver.set_cost_matrix(&costs)?;
        solver.run()?;
        total_cost += solver.cost();
    }

    println!("total: {total_cost}");
    Ok(())
}
