#![no_main]
use libfuzzer_sys::fuzz_target;

use libzpoly::Poly;

fn to_poly(terms: Vec<(u8, i8)>) -> Option<Poly> {
    Poly::from_ints(terms.into_iter().map(|(d, c)| (d as usize, c as i64))).ok()
}

fuzz_target!(|input: (Vec<(u8, i8)>, Vec<(u8, i8)>)| {
    let (num, den) = match (to_poly(input.0), to_poly(input.1)) {
        (Some(num), Some(den)) => (num, den),
        _ => return,
    };

    match Poly::divmod(&num, &den) {
        Ok((quo, rem)) => {
            assert!(rem.is_zero() || rem.max_degree() < den.max_degree());
            assert_eq!(&(&quo * &den) + &rem, num);
        }
        Err(_) => assert!(den.is_zero()),
    }
});
