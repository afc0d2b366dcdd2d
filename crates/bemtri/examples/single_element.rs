//! Build one element and print its frame, SFM and collocation points.
//!
//! Run with: cargo run -p bemtri --example single_element

use bemtri::prelude::*;
use nalgebra::vector;

fn main() -> Result<()> {
    let tri = Triangle::new(
        vector![0.0, 0.1, 0.0],
        vector![1.8, 0.0, 0.0],
        vector![1.2, 1.8, 0.0],
    );
    let el = Element::new(tri, &NumParams::default().with_beta(0.25))?;
    println!("rotation tensor:{}", el.r_tensor);
    println!("tau: {:?}", el.tau);
    for (k, row) in el.sfm.row_iter().enumerate() {
        let coeffs: Vec<String> = row.iter().map(|c| format!("{:+.4}", c)).collect();
        println!("N{k}: [{}]", coeffs.join(", "));
    }
    for (k, p) in el.colloc.iter().enumerate() {
        println!("cp{k}: ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
    }
    if let Some(s1) = bemtri::api::sfm_at_vertex(&el.elem_sfm(), &el.tau, 1) {
        // constant column: basis values at vertex 1
        let at_v1: Vec<String> = s1.column(0).iter().map(|c| format!("{:.3}", c.re)).collect();
        println!("N(v1) = [{}]", at_v1.join(", "));
    }
    let hz = el.hz(&vector![1.0, 1.4, -1.21]);
    println!("h = {:.4}, z = {:.4}", hz.h, hz.z);
    Ok(())
}
