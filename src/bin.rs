extern crate seraphis_generators;

use curve25519_dalek::scalar::Scalar;
use seraphis_generators::{
    generators::generators, get_G_table, get_H_table, get_x25519_G, hash_to_point, GeneratorName,
};

pub fn main() {
    for name in GeneratorName::ALL {
        let generator = generators().get(name);
        println!("{}: {}", name, hex::encode(generator.compact().as_bytes()));
    }
    println!("x25519 G: {}", hex::encode(get_x25519_G().as_bytes()));

    // lets commit to 16 with blinding 7
    let commitment = &Scalar::from(16u64) * get_G_table() + &Scalar::from(7u64) * get_H_table();
    println!("commitment: {}", hex::encode(commitment.compress().as_bytes()));

    let key_image_base = hash_to_point(b"example public key");
    println!("hash_to_point: {}", hex::encode(key_image_base.as_bytes()));
}
