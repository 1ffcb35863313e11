// The global config is process wide, so this binary holds a single test.
use densor_core::{config, Config, Tensor};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn parallel_path_matches_sequential() {
    config::set_global(Config { par_threshold: 0 }).unwrap();
    assert_eq!(config::global().par_threshold, 0);
    assert!(config::set_global(Config::default()).is_err());

    let mut rng = StdRng::seed_from_u64(7);
    let a = Tensor::<f64>::rand_uniform([64, 33], -1.0, 1.0, &mut rng).unwrap();
    let b = Tensor::<f64>::rand_uniform([64, 33], -1.0, 1.0, &mut rng).unwrap();

    let expect = |f: fn(f64, f64) -> f64| {
        let data: Vec<f64> = a.data().iter().zip(b.data()).map(|(&x, &y)| f(x, y)).collect();
        Tensor::new(data, [64, 33]).unwrap()
    };
    assert_eq!(a.add(&b).unwrap(), expect(|x, y| x + y));
    assert_eq!(a.sub(&b).unwrap(), expect(|x, y| x - y));
    assert_eq!(a.elementwise_mul(&b).unwrap(), expect(|x, y| x * y));
    assert_eq!(a.scale(3.0), expect(|x, _| 3.0 * x));

    let i = Tensor::<i32>::arange(0, 1, 10_000);
    assert_eq!(i.add(&i).unwrap(), i.scale(2));
}
