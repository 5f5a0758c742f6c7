//! Contract interfaces used by the deploy scripts

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IPriceConsumerV3 {
        function getLatestPrice() external view returns (int256);
    }
}

sol! {
    function setPriceOracle(address oracle) external;
}
