use std::collections::HashMap;

use numerix::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let environments = vec![
        HashMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        HashMap::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
    ];

    let expression = "price * volume / 1000 + sqrt(price)";

    for (i, result) in evaluate_batch(expression, &environments).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
