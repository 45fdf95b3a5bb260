use densemat::filter::{Bias, Chain, Derive, Filter, Integrate, Mult};
use densemat::{matrix, GResult, Matrix};
use log::info;
use num_complex::Complex64;

fn main() -> GResult<()> {
    env_logger::init();

    let mut m1 = Matrix::<f64>::new(2, 3);
    m1.loader().put_all([1.0, 1.0, 1.0, 2.0, 2.0, 2.0])?;
    let mut m2 = Matrix::<f64>::new(3, 4);
    m2.fill([1.0, 2.0, 3.0, 4.0].repeat(3))?;

    let m3 = (&m1 * &m2)?;
    print!("m1 =\n{}m2 =\n{}m1 * m2 =\n{}", m1, m2, m3);

    if let Err(e) = &m1 * &Matrix::<f64>::new(2, 4) {
        info!("expected failure: {}", e);
    }

    let sq = matrix![[2.0, 1.0], [0.5, 3.0]];
    let id = Matrix::<f64>::identity(2, 0);
    print!("sq * I =\n{}", (&sq * &id)?);

    let c = matrix![
        [Complex64::new(1.0, 1.0), Complex64::new(2.0, 2.0)],
        [Complex64::new(0.0, 1.0), Complex64::new(1.0, 0.0)],
    ];
    print!("c * c =\n{}", (&c * &c)?);

    let mut chain = Chain::new()
        .push(Derive::new())
        .push(Mult::new(0.5))
        .push(Integrate::new(0.0))
        .push(Bias::new(1.0));
    let samples = [0.0, 1.0, 4.0, 9.0, 16.0];
    println!("{}: {:?}", chain.name(), chain.run(1.0, &samples));
    Ok(())
}
