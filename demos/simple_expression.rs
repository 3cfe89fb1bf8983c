use std::collections::HashMap;
use std::f64::consts::PI;

use log::info;
use numerix::evaluate;

fn main() {
    pretty_env_logger::init();
    info!("hello from numerix!");

    let no_vars = HashMap::new();
    println!("{:?}", evaluate("-5 + 3", &no_vars)); // expect -2
    println!("{:?}", evaluate("-(2 + 3)", &no_vars)); // expect -5

    let vars = HashMap::from([("x".to_string(), 4.0)]);
    println!("{:?}", evaluate("2 * -x", &vars)); // expect -8

    let vars = HashMap::from([("x".to_string(), PI / 2.0)]);
    println!("{:?}", evaluate("-sin(-x)", &vars)); // expect -1
}
