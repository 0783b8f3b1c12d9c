use anyhow::{bail, Context};
use msgs::{ClientMsg, Shape};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCmd {
    Move (Shape),
    Drag { to: Shape, steps: u32 },
    Click,
    DoubleClick,
}

impl ConsoleCmd {
    pub fn parse(input: &str) -> anyhow::Result<ConsoleCmd> {
        let mut words = input.split_whitespace();
        let Some(cmd) = words.next() else { bail!("empty cmd") };
        let args = words.collect::<Vec<_>>();

        let cmd = match (cmd, args.as_slice()) {
            ("move", [left, top]) => ConsoleCmd::Move(parse_shape(left, top)?),
            ("drag", [left, top, steps]) => {
                let steps = steps.parse::<u32>().context("steps must be a positive integer")?;
                if steps == 0 {
                    bail!("steps must be a positive integer");
                }
                ConsoleCmd::Drag { to: parse_shape(left, top)?, steps }
            }
            ("click", []) => ConsoleCmd::Click,
            ("dblclick", []) => ConsoleCmd::DoubleClick,
            ("move", _) => bail!("usage: move <left> <top>"),
            ("drag", _) => bail!("usage: drag <left> <top> <steps>"),
            _ => bail!("cmd not recognized"),
        };
        Ok(cmd)
    }

    /// The calls this command makes, starting from where the shape is now.
    pub fn to_msgs(self, from: Shape) -> Vec<ClientMsg> {
        match self {
            ConsoleCmd::Move (to) => vec![ClientMsg::UpdateModel(to)],
            ConsoleCmd::Drag { to, steps } => (1..=steps)
                .map(|step| {
                    let t = step as f64 / steps as f64;
                    let left = from.left + (to.left - from.left) * t;
                    let top = from.top + (to.top - from.top) * t;
                    ClientMsg::UpdateModel(Shape::new(left, top))
                })
                .collect(),
            ConsoleCmd::Click => vec![ClientMsg::TriggerShapeClick],
            ConsoleCmd::DoubleClick => vec![ClientMsg::TriggerShapeDoubleClick],
        }
    }
}

fn parse_shape(left: &str, top: &str) -> anyhow::Result<Shape> {
    let left = left.parse::<f64>().with_context(|| format!("invalid left: {left}"))?;
    let top = top.parse::<f64>().with_context(|| format!("invalid top: {top}"))?;
    Ok(Shape::new(left, top))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(ConsoleCmd::parse("move 10 20").unwrap(), ConsoleCmd::Move(Shape::new(10.0, 20.0)));
        assert_eq!(
            ConsoleCmd::parse("  drag 4 -8 4 ").unwrap(),
            ConsoleCmd::Drag { to: Shape::new(4.0, -8.0), steps: 4 }
        );
        assert_eq!(ConsoleCmd::parse("click").unwrap(), ConsoleCmd::Click);
        assert_eq!(ConsoleCmd::parse("dblclick").unwrap(), ConsoleCmd::DoubleClick);
    }

    #[test]
    fn rejects_bad_input() {
        for input in ["", "jump", "move 1", "move a b", "drag 1 1 0", "drag 1 1 x", "click now"] {
            assert!(ConsoleCmd::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn drag_interpolates_up_to_the_target() {
        let msgs = ConsoleCmd::Drag { to: Shape::new(4.0, 8.0), steps: 4 }.to_msgs(Shape::new(0.0, 0.0));
        assert_eq!(
            msgs,
            vec![
                ClientMsg::UpdateModel(Shape::new(1.0, 2.0)),
                ClientMsg::UpdateModel(Shape::new(2.0, 4.0)),
                ClientMsg::UpdateModel(Shape::new(3.0, 6.0)),
                ClientMsg::UpdateModel(Shape::new(4.0, 8.0)),
            ]
        );
    }
}
