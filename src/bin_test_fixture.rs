fn main() {
    use ax25dsp::iir::{IirCascade};
    use ax25dsp::math::{CascadeOrder, Complex32};
    fn re(x: f32) -> Complex32 { Complex32::new(x, 0.0) }
    let a = vec![re(1.0), re(1.0), re(0.5), re(0.5), re(0.5), re(0.5), re(0.5)];
    let b = vec![re(1.0), re(2.0), re(3.0), re(4.0), re(5.0), re(6.0), re(7.0)];
    let mut cascade = IirCascade::new(6, CascadeOrder::ClosestFirst, &a, &b);
    let mut impulse = vec![re(0.0); 8];
    impulse[0] = re(1.0);
    let mut output = vec![Complex32::default(); 8];
    cascade.execute(&impulse, &mut output);
    for y in &output { println!("{} {}", y.re, y.im); }
}
