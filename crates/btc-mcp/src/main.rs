use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServiceExt,
};
use serde_json::Value;

use btc_mcp::{ToolDispatcher, ToolResponse};
use std::sync::Arc;

#[derive(Clone)]
struct BtcDataMcpServer {
    dispatcher: Arc<ToolDispatcher>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BtcDataMcpServer {
    fn new(dispatcher: ToolDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            tool_router: Self::tool_router(),
        }
    }

    // Handlers block on HTTP, so dispatch runs on the blocking pool.
    async fn dispatch_tool(
        &self,
        name: &str,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        let dispatcher = self.dispatcher.clone();
        let tool = name.to_string();
        let input = params.0;
        let response = tokio::task::spawn_blocking(move || dispatcher.dispatch(&tool, input))
            .await
            .unwrap_or_else(|e| ToolResponse::error(format!("Tool execution failed: {}", e)));
        let content_text = if response.success {
            "ok".to_string()
        } else {
            response
                .error
                .clone()
                .unwrap_or_else(|| "error".to_string())
        };
        Ok(CallToolResult {
            content: vec![Content::text(content_text)],
            structured_content: Some(serde_json::to_value(&response).unwrap_or(Value::Null)),
            is_error: Some(!response.success),
            meta: None,
        })
    }

    #[tool(
        name = "get_bitcoin_network_overview",
        description = "Network status: block height, hashrate, difficulty, and mined supply"
    )]
    async fn network_overview(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_network_overview", params)
            .await
    }

    #[tool(
        name = "get_bitcoin_fee_analysis",
        description = "Recommended fee rates per priority tier with USD cost and mempool congestion"
    )]
    async fn fee_analysis(&self, params: Parameters<Value>) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_fee_analysis", params).await
    }

    #[tool(
        name = "get_bitcoin_price_usd",
        description = "Current bitcoin price in USD"
    )]
    async fn bitcoin_price(&self, params: Parameters<Value>) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_price_usd", params).await
    }

    #[tool(
        name = "get_bitcoin_market_data",
        description = "Full bitcoin market report: price history, records, supply, sentiment, signals"
    )]
    async fn bitcoin_market_data(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_market_data", params).await
    }

    #[tool(
        name = "get_cryptomarket_overview",
        description = "Global crypto market: total capitalization, BTC dominance, fear and greed index"
    )]
    async fn cryptomarket_overview(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_cryptomarket_overview", params)
            .await
    }

    #[tool(
        name = "get_info_about_address",
        description = "Balance and activity of a bitcoin address (mempool.space view)"
    )]
    async fn info_about_address(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_info_about_address", params).await
    }

    #[tool(
        name = "get_address_overview",
        description = "Compact balance and history of a bitcoin address (blockchain.info view)"
    )]
    async fn address_overview(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_address_overview", params).await
    }

    #[tool(
        name = "get_transactions_of_address",
        description = "Recent transactions of a bitcoin address"
    )]
    async fn transactions_of_address(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_transactions_of_address", params)
            .await
    }

    #[tool(
        name = "get_bitcoin_transaction_infos",
        description = "Status, fees, and shape of a transaction by txid"
    )]
    async fn transaction_infos(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_transaction_infos", params)
            .await
    }

    #[tool(
        name = "get_transaction_input_output",
        description = "Inputs and outputs of a transaction with addresses and amounts"
    )]
    async fn transaction_input_output(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_transaction_input_output", params)
            .await
    }

    #[tool(
        name = "get_summary_of_latest_block",
        description = "Height, hash, and timestamp of the most recent block"
    )]
    async fn latest_block_summary(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_summary_of_latest_block", params)
            .await
    }

    #[tool(
        name = "get_block_hash_with_height",
        description = "Block hash for a given block height"
    )]
    async fn block_hash_with_height(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_block_hash_with_height", params)
            .await
    }

    #[tool(
        name = "get_10_latest_blocks_informations",
        description = "Details of the ten most recent blocks: size, transactions, rewards, miner"
    )]
    async fn latest_blocks(&self, params: Parameters<Value>) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_10_latest_blocks_informations", params)
            .await
    }

    #[tool(
        name = "get_top_10_mining_pools_rank",
        description = "Top mining pools of the last week ranked by blocks mined"
    )]
    async fn top_mining_pools(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_top_10_mining_pools_rank", params)
            .await
    }

    #[tool(
        name = "get_mining_pools_hashrates_3month",
        description = "Mining pool hashrates and network share over the last three months"
    )]
    async fn pool_hashrates(&self, params: Parameters<Value>) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_mining_pools_hashrates_3month", params)
            .await
    }

    #[tool(
        name = "get_top1_mining_pool",
        description = "The dominant mining pool of the last three months"
    )]
    async fn top_mining_pool(&self, params: Parameters<Value>) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_top1_mining_pool", params).await
    }

    #[tool(
        name = "get_mining_pool_by_slug",
        description = "Profile of one mining pool by its slug (e.g. foundryusa)"
    )]
    async fn mining_pool_by_slug(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_mining_pool_by_slug", params).await
    }

    #[tool(
        name = "get_bitcoin_network_mining_pools_statistics",
        description = "Mining macro view: network conditions, halving countdown, pool distribution"
    )]
    async fn mining_statistics(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_bitcoin_network_mining_pools_statistics", params)
            .await
    }

    #[tool(
        name = "get_ordinals_of_address",
        description = "Ordinal inscriptions held by a bitcoin address"
    )]
    async fn ordinals_of_address(
        &self,
        params: Parameters<Value>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch_tool("get_ordinals_of_address", params).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for BtcDataMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only Bitcoin data server. Use tools like get_bitcoin_network_overview, get_bitcoin_fee_analysis, and get_info_about_address."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher = ToolDispatcher::new();
    let server = BtcDataMcpServer::new(dispatcher);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
