use crate::gate::NotGate;
use sim_core::{NodeId, Result, Simulator};

/// A gate made from transistors that allows a value to be optionally passed through or
/// disconnected (high-impedance), based on the state of an enable pin.
#[derive(Clone, Copy, Debug)]
pub struct TriStateBufferGate {
    /// The enable node: conducting (non-high-impedance output) while low.
    pub enable: NodeId,
    /// The data input node.
    pub input: NodeId,
    /// The gate's single output node.
    pub output: NodeId,
}

impl TriStateBufferGate {
    /// Constructs a new tri-state buffer gate.
    pub fn new(sim: &mut Simulator) -> Result<Self> {
        let vdd = sim.create_vdd()?;
        let gnd = sim.create_gnd()?;
        let enable_not_gate = NotGate::new(sim)?;
        let input_not_gate = NotGate::new(sim)?;

        let enable_pmos = sim.create_pmos()?;
        let enable_nmos = sim.create_nmos()?;
        let input_pmos = sim.create_pmos()?;
        let input_nmos = sim.create_nmos()?;

        sim.connect(vdd.node(), enable_pmos.source())?;
        sim.connect(gnd.node(), enable_nmos.source())?;
        sim.connect(enable_pmos.drain(), input_pmos.source())?;
        sim.connect(enable_nmos.drain(), input_nmos.source())?;
        sim.connect(input_nmos.drain(), input_pmos.drain())?;

        sim.connect(input_not_gate.output, input_nmos.gate())?;
        sim.connect(input_not_gate.output, input_pmos.gate())?;
        sim.connect(enable_not_gate.input, enable_pmos.gate())?;
        sim.connect(enable_not_gate.output, enable_nmos.gate())?;

        Ok(TriStateBufferGate {
            enable: enable_not_gate.input,
            input: input_not_gate.input,
            output: input_nmos.drain(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::LogicValue;

    #[test]
    fn enabled_passes_input_disabled_floats() {
        use LogicValue::*;
        let cases = [
            (Zero, Zero, Zero),
            (Zero, One, One),
            (One, Zero, Z),
            (One, One, Z),
        ];
        for (enable, input_value, expected) in cases {
            let mut sim = Simulator::new();
            let gate = TriStateBufferGate::new(&mut sim).unwrap();
            let enable_in = sim.create_input().unwrap();
            let data_in = sim.create_input().unwrap();
            sim.connect(enable_in.node(), gate.enable).unwrap();
            sim.connect(data_in.node(), gate.input).unwrap();
            sim.build_topology().unwrap();
            sim.input_set(enable_in, enable).unwrap();
            sim.input_set(data_in, input_value).unwrap();
            sim.tick().unwrap();
            assert_eq!(sim.node_resolved_value(gate.output).unwrap(), expected);
        }
    }
}
