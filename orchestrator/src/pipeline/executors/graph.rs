//! Graph-declared pipeline execution
//!
//! The stages are declared as nodes of a directed graph with an entry point,
//! mirroring a node/edge workflow engine. The graph must be a single chain;
//! it is checked for cycles and branches before anything runs, and
//! [`run_stage`] rejects a chain that visits stages out of order.

use crate::core::PipelineState;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::pipeline::stages::{run_stage, PipelineSettings, PipelineStage};
use crate::pipeline::traits::PipelineExecutor;
use async_trait::async_trait;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use shared::{OptimizationRequest, OptimizationResult};
use std::collections::HashMap;
use tracing::debug;

/// Directed graph of pipeline stages
#[derive(Debug, Clone)]
pub struct PipelineGraph {
    graph: DiGraph<PipelineStage, ()>,
    nodes: HashMap<PipelineStage, NodeIndex>,
    entry: Option<NodeIndex>,
}

impl PipelineGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            entry: None,
        }
    }

    /// prepare -> forecast -> optimize -> report
    pub fn standard() -> Self {
        let mut graph = Self::new();
        for stage in PipelineStage::ALL {
            graph.add_node(stage);
        }
        graph.set_entry_point(PipelineStage::Prepare);
        graph.add_edge(PipelineStage::Prepare, PipelineStage::Forecast);
        graph.add_edge(PipelineStage::Forecast, PipelineStage::Optimize);
        graph.add_edge(PipelineStage::Optimize, PipelineStage::Report);
        graph
    }

    /// Add a stage node; adding the same stage twice is a no-op
    pub fn add_node(&mut self, stage: PipelineStage) -> NodeIndex {
        if let Some(idx) = self.nodes.get(&stage) {
            return *idx;
        }
        let idx = self.graph.add_node(stage);
        self.nodes.insert(stage, idx);
        idx
    }

    pub fn add_edge(&mut self, from: PipelineStage, to: PipelineStage) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.add_edge(a, b, ());
    }

    pub fn set_entry_point(&mut self, stage: PipelineStage) {
        self.entry = Some(self.add_node(stage));
    }

    /// Stages in the order the chain visits them
    pub fn execution_order(&self) -> OrchestratorResult<Vec<PipelineStage>> {
        let entry = self
            .entry
            .ok_or_else(|| OrchestratorError::invalid_graph("no entry point"))?;

        toposort(&self.graph, None).map_err(|cycle| {
            OrchestratorError::invalid_graph(format!("cycle through {}", self.graph[cycle.node_id()]))
        })?;

        let mut order = Vec::with_capacity(self.graph.node_count());
        let mut current = Some(entry);
        while let Some(node) = current {
            order.push(self.graph[node]);
            let mut successors = self.graph.neighbors_directed(node, Direction::Outgoing);
            current = successors.next();
            if successors.next().is_some() {
                return Err(OrchestratorError::invalid_graph(format!(
                    "{} branches to more than one stage",
                    self.graph[node]
                )));
            }
        }

        if order.len() != self.graph.node_count() {
            return Err(OrchestratorError::invalid_graph(format!(
                "{} of {} stages unreachable from entry point",
                self.graph.node_count() - order.len(),
                self.graph.node_count()
            )));
        }
        Ok(order)
    }
}

impl Default for PipelineGraph {
    fn default() -> Self {
        Self::standard()
    }
}

/// Runs the stages by walking a [`PipelineGraph`]
#[derive(Debug, Clone)]
pub struct GraphExecutor {
    graph: PipelineGraph,
    settings: PipelineSettings,
}

impl GraphExecutor {
    pub fn new() -> Self {
        Self::with_graph(PipelineGraph::standard(), PipelineSettings::default())
    }

    pub fn with_graph(graph: PipelineGraph, settings: PipelineSettings) -> Self {
        Self { graph, settings }
    }

    pub fn with_settings(settings: PipelineSettings) -> Self {
        Self::with_graph(PipelineGraph::standard(), settings)
    }

    pub fn run(&self, request: OptimizationRequest) -> OrchestratorResult<OptimizationResult> {
        let order = self.graph.execution_order()?;
        let note = format!(
            "Agentic pipeline: {}",
            order.iter().map(|s| s.name()).collect::<Vec<_>>().join(" -> ")
        );

        let mut state = PipelineState::new(request).with_note(note);
        for stage in order {
            state = run_stage(stage, state, &self.settings)?;
        }
        if !state.is_complete() {
            return Err(OrchestratorError::invalid_graph(format!(
                "graph ended before report (next stage: {})",
                state.next_stage().map(|s| s.name()).unwrap_or("none")
            )));
        }
        debug!(executor = self.name(), "pipeline finished");
        state.into_result()
    }
}

impl Default for GraphExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PipelineExecutor for GraphExecutor {
    async fn execute(&self, request: OptimizationRequest) -> OrchestratorResult<OptimizationResult> {
        self.run(request)
    }

    fn name(&self) -> &'static str {
        "graph"
    }
}
