use densor_core::Tensor;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let arange = Tensor::<f64>::arange(0., 1., 10);
    dbg!(arange.to_vec1().unwrap());

    let a = Tensor::<f64>::full([3, 4], 1.0).unwrap();
    let b = Tensor::<f64>::full([3, 4], 2.0).unwrap();
    let c = Tensor::<f64>::full([3, 4], 3.0).unwrap();
    let d = Tensor::<f64>::full([3, 4], 4.0).unwrap();
    let res = a.elementwise_mul(&b).unwrap().add(&c).unwrap();
    let res = (&res + &d).unwrap();
    assert_eq!(res.to_vec2().unwrap(), vec![vec![9.0; 4]; 3]);

    let mut ints = Tensor::<i32>::new(vec![1, 2, 3, 4], [2, 2]).unwrap();
    ints.set_at(&[0, 1], 9).unwrap();
    let scaled = 10 * &ints;
    dbg!(scaled.to_vec2().unwrap());

    if let Err(err) = ints.access(&[2, 0]) {
        println!("rejected: {err}");
    }
    if let Err(err) = ints.add(&Tensor::zeros([4]).unwrap()) {
        println!("rejected: {err}");
    }
}
