use ecdf_estimator::estimators::approaches::ecdf::ChooseBinsOptions;
use ecdf_estimator::estimators::objective::{Objective, ObjectiveFunction};
use ecdf_estimator::plot;
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Draw `count` realisations of a 5-dimensional Gaussian with the given mean
fn realisations(count: usize, mean: f64, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let normal = Normal::new(mean, 1.0).unwrap();
    (0..count)
        .map(|_| (0..5).map(|_| normal.sample(rng)).collect())
        .collect()
}

fn euclidean(a: &Vec<f64>, b: &Vec<f64>) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let true_mean = 0.0;

    // Reference data: 20 subsets of 50 realisations each
    let reference = realisations(1000, true_mean, &mut rng);
    let mut objective = Objective::standard(
        reference,
        Array1::linspace(0.5, 7.0, 40),
        euclidean,
        &[50; 20],
    )?;
    println!(
        "Initial model: {} bins, {} ECDF vectors, spectral condition {:.3e}",
        objective.bins().len(),
        objective.ecdf_list().ncols(),
        objective.model().spectral_condition()
    );

    let condition = objective.choose_bins(&ChooseBinsOptions::new(8))?;
    println!(
        "After choose_bins: bins = {:.3}, spectral condition {:.3e}",
        objective.bins(),
        condition.unwrap_or(f64::NAN)
    );

    // Scan candidate parameters and score freshly generated data for each
    println!("\n{:>10} {:>14}", "candidate", "objective");
    let mut best = (f64::NAN, f64::INFINITY);
    for i in 0..=20 {
        let candidate = -1.0 + 0.1 * i as f64;
        let data = realisations(50, candidate, &mut rng);
        let score = objective.evaluate(&data, &mut rng)?;
        println!("{candidate:>10.2} {score:>14.4}");
        if score < best.1 {
            best = (candidate, score);
        }
    }
    println!("\nBest candidate: {:.2} (true mean {true_mean:.2})", best.0);

    plot::plot_ecdf_vectors(objective.model(), "ecdf_vectors.png")?;
    plot::plot_mean_vector(objective.model(), "mean_vector.png")?;
    let hist = plot::plot_chi2_test(objective.model(), "chi2_test.png", None)?;
    println!(
        "\nChi-squared test: {} degrees of freedom, mean reference score {:.3}",
        hist.degrees_of_freedom,
        hist.scores.mean().unwrap_or(f64::NAN)
    );

    println!("\nResults saved to:");
    println!("- ecdf_vectors.png");
    println!("- mean_vector.png");
    println!("- chi2_test.png");

    Ok(())
}
