/// Round-robin playback over the edge list. At most one edge is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequencer {
	edge_count: usize,
	step: usize,
	active: Option<usize>,
}

impl Sequencer {
	/// Stopped, positioned at the first of `edge_count` edges.
	pub fn new(edge_count: usize) -> Self {
		Self {
			edge_count,
			..Self::default()
		}
	}

	/// Whether an edge is highlighted.
	pub fn is_playing(&self) -> bool {
		self.active.is_some()
	}

	/// Index of the highlighted edge.
	pub fn active_edge(&self) -> Option<usize> {
		self.active
	}

	/// Whether `edge` is the highlighted one.
	pub fn is_active(&self, edge: usize) -> bool {
		self.active == Some(edge)
	}

	/// Start from the current step; the first edge lights up immediately.
	pub fn enable(&mut self) {
		if self.edge_count > 0 {
			self.active = Some(self.step);
		}
	}

	/// Stops and rewinds to the first edge.
	pub fn disable(&mut self) {
		self.active = None;
		self.step = 0;
	}

	/// Advance to the next edge. Does nothing while stopped.
	pub fn tick(&mut self) -> Option<usize> {
		if self.active.is_none() {
			return None;
		}
		self.step = (self.step + 1) % self.edge_count;
		self.active = Some(self.step);
		self.active
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycles_in_order_and_wraps() {
		let mut s = Sequencer::new(3);
		s.enable();
		assert_eq!(s.active_edge(), Some(0));
		let visited: Vec<_> = (0..4).filter_map(|_| s.tick()).collect();
		assert_eq!(visited, vec![1, 2, 0, 1]);
	}

	#[test]
	fn disable_clears_and_rewinds() {
		let mut s = Sequencer::new(3);
		s.enable();
		s.tick();
		s.disable();
		assert_eq!(s.active_edge(), None);
		assert_eq!(s.tick(), None);
		s.enable();
		assert_eq!(s.active_edge(), Some(0));
	}

	#[test]
	fn no_edges_never_activates() {
		let mut s = Sequencer::new(0);
		s.enable();
		assert!(!s.is_playing());
		assert_eq!(s.tick(), None);
	}
}
